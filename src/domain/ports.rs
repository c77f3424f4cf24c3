use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::outcome::TransactionOutcome;
use crate::domain::request::NormalizedRequest;
use crate::error::Result;

/// Opaque handle anchoring the authorization flow's own UI.
///
/// The orchestrator never looks inside it; it only requires one to be
/// present and passes it through to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationContext(String);

impl PresentationContext {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }
}

/// Everything the external authorization flow needs for one attempt.
///
/// The credential is deliberately excluded from serialization: no serialized
/// form of the bundle (wire dump, log record) may carry it.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AuthorizationBundle {
    pub email: String,
    pub amount: String,
    pub reference: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    pub callback_url: String,
    #[serde(skip_serializing)]
    pub credential: String,
}

impl AuthorizationBundle {
    pub fn from_normalized(
        normalized: NormalizedRequest,
        callback_url: String,
        credential: String,
    ) -> Self {
        Self {
            email: normalized.email,
            amount: normalized.amount,
            reference: normalized.reference,
            currency: normalized.currency,
            plan: normalized.plan,
            metadata: normalized.metadata,
            callback_url,
            credential,
        }
    }
}

/// The opaque, platform-provided authorization flow.
///
/// One concrete variant is injected at composition time; `authorize` is a
/// single long-lived suspension point that resolves to the terminal outcome
/// or fails while launching. No timeout is imposed by this layer.
#[async_trait]
pub trait AuthorizationGateway: Send + Sync {
    async fn authorize(
        &self,
        bundle: AuthorizationBundle,
        context: &PresentationContext,
    ) -> Result<TransactionOutcome>;
}

pub type AuthorizationGatewayBox = Box<dyn AuthorizationGateway>;
pub type AuthorizationGatewayFactory = Box<dyn Fn() -> AuthorizationGatewayBox + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_serialization_never_carries_credential() {
        let bundle = AuthorizationBundle {
            email: "ada@example.com".to_string(),
            amount: "25.00".to_string(),
            reference: "order-1".to_string(),
            currency: "USD".to_string(),
            plan: None,
            metadata: None,
            callback_url: "https://pay.example.com/return".to_string(),
            credential: "sk_live_abc123".to_string(),
        };

        let json = serde_json::to_string(&bundle).expect("bundle should serialize");
        assert!(!json.contains("sk_live_abc123"));
        assert!(!json.contains("credential"));
        assert!(json.contains("order-1"));
    }
}
