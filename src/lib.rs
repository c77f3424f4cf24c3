pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

/// Target attached to every diagnostic record emitted by the payment flow.
pub const LOG_TARGET: &str = "payment_flow";
