use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::LOG_TARGET;

/// Currency applied when a request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Callback URL applied when a request does not supply one.
pub const DEFAULT_CALLBACK_URL: &str = "https://pay.example.com/return";

/// Configured fallbacks for the optional request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub default_currency: String,
    pub default_callback_url: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            default_callback_url: DEFAULT_CALLBACK_URL.to_string(),
        }
    }
}

/// A single payment-initiation attempt as submitted by the caller.
///
/// Immutable once submitted; discarded after the attempt resolves. The
/// `reference` is the caller's only continuity token across attempts and its
/// uniqueness is the caller's responsibility.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub customer_email: String,
    /// Decimal numeric string; units are caller-defined.
    pub amount: String,
    pub reference: String,
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Secret credential gating the authorization flow.
    #[serde(default)]
    pub auth_credential: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Optional plan identifier, handed to the gateway untouched.
    #[serde(default)]
    pub plan: Option<String>,
    /// Free-form data; re-keyed into a string-keyed mapping during
    /// normalization, never interpreted here.
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// A request after validation-gated canonicalization, safe to hand to the
/// authorization flow.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct NormalizedRequest {
    pub email: String,
    pub amount: String,
    pub reference: String,
    pub currency: String,
    pub plan: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl NormalizedRequest {
    /// Canonicalizes a request that already passed validation.
    ///
    /// Pure except for a warning-level diagnostic when metadata has to be
    /// discarded. Must only be called once `validation::validate` reported
    /// zero violations.
    pub fn from_validated(request: &PaymentRequest, config: &FlowConfig) -> Self {
        Self {
            email: request.customer_email.trim().to_lowercase(),
            amount: strip_amount(&request.amount),
            reference: request.reference.trim().to_string(),
            currency: request
                .currency
                .clone()
                .unwrap_or_else(|| config.default_currency.clone()),
            plan: request.plan.clone(),
            metadata: convert_metadata(request.metadata.as_ref()),
        }
    }
}

/// Retains only ASCII digits and `.`; a syntactic strip, not a numeric parse.
fn strip_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Re-keys metadata into a string-keyed mapping.
///
/// Anything other than a JSON object cannot be re-keyed; it is discarded and
/// the attempt proceeds without metadata.
fn convert_metadata(metadata: Option<&Value>) -> Option<Map<String, Value>> {
    match metadata {
        None => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(other) => {
            warn!(
                target: LOG_TARGET,
                kind = value_kind(other),
                "discarding metadata that is not a string-keyed mapping"
            );
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
