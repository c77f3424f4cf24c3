use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::OnceLock;

use crate::domain::ports::PresentationContext;
use crate::domain::request::PaymentRequest;

/// Minimum accepted length for the caller-generated reference.
pub const MIN_REFERENCE_LEN: usize = 5;
/// Prefix identifying a secret/live-tier credential. Public-tier keys
/// (`pk_live_…`) are rejected.
pub const SECRET_CREDENTIAL_PREFIX: &str = "sk_live_";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Ordered list of human-readable violations; empty means the request is
/// valid. Order follows the fixed field-check order, not severity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }

    fn push(&mut self, violation: &str) {
        self.violations.push(violation.to_string());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.violations.join("; "))
    }
}

/// Checks every rule and returns the full violation list; never raises and
/// never short-circuits, so the caller sees all problems at once.
///
/// Check order: email, amount, reference, credential, currency, presentation
/// context. Violation messages name the field but never echo the submitted
/// value.
pub fn validate(
    request: &PaymentRequest,
    context: Option<&PresentationContext>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !email_regex().is_match(&request.customer_email) {
        report.push("customer email is missing or malformed");
    }

    let amount = request.amount.trim();
    let positive = amount
        .parse::<Decimal>()
        .is_ok_and(|value| value > Decimal::ZERO);
    if amount.is_empty() || !positive {
        report.push("amount must be a positive number");
    }

    let reference = request.reference.trim();
    if reference.is_empty() || reference.chars().count() < MIN_REFERENCE_LEN {
        report.push("reference must be at least 5 characters");
    }

    match request.auth_credential.as_deref() {
        Some(credential) if !credential.is_empty() => {
            if !credential.starts_with(SECRET_CREDENTIAL_PREFIX) {
                report.push("authorization credential must be a secret live key");
            }
        }
        _ => report.push("authorization credential is required"),
    }

    if let Some(currency) = request.currency.as_deref()
        && !currency.is_empty()
        && currency.chars().count() != 3
    {
        report.push("currency must be a 3-letter code");
    }

    if context.is_none() {
        report.push("presentation context is required");
    }

    report
}
