//! Application layer containing the core orchestration logic.
//!
//! This module defines the `TransactionOrchestrator`, the primary entry
//! point for running one payment-initiation attempt end to end.

pub mod orchestrator;
