use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::outcome::TransactionOutcome;
use crate::domain::ports::{AuthorizationBundle, AuthorizationGateway, PresentationContext};
use crate::error::{PaymentError, Result};

#[derive(Debug, Clone)]
enum Resolution {
    Outcome(TransactionOutcome),
    LaunchFailure(String),
}

/// A scripted authorization gateway.
///
/// Resolves every attempt to a preconfigured outcome (or launch failure) and
/// records each bundle it receives. Stands in for the platform-provided flow
/// in tests and in the CLI's dry-run mode; thread-safe, `Clone` shares the
/// recorded call log.
#[derive(Clone)]
pub struct ScriptedAuthorizationGateway {
    resolution: Resolution,
    received: Arc<RwLock<Vec<AuthorizationBundle>>>,
}

impl ScriptedAuthorizationGateway {
    /// A gateway that resolves every attempt as `Completed`.
    pub fn completing() -> Self {
        Self::resolving(TransactionOutcome::Completed)
    }

    /// A gateway that resolves every attempt as `NotCompleted`.
    pub fn declining() -> Self {
        Self::resolving(TransactionOutcome::NotCompleted)
    }

    pub fn resolving(outcome: TransactionOutcome) -> Self {
        Self {
            resolution: Resolution::Outcome(outcome),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A gateway that fails while launching instead of resolving.
    pub fn failing_launch(reason: impl Into<String>) -> Self {
        Self {
            resolution: Resolution::LaunchFailure(reason.into()),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Bundles received so far, in call order.
    pub async fn received(&self) -> Vec<AuthorizationBundle> {
        self.received.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.received.read().await.len()
    }
}

#[async_trait]
impl AuthorizationGateway for ScriptedAuthorizationGateway {
    async fn authorize(
        &self,
        bundle: AuthorizationBundle,
        _context: &PresentationContext,
    ) -> Result<TransactionOutcome> {
        self.received.write().await.push(bundle);
        match &self.resolution {
            Resolution::Outcome(outcome) => Ok(*outcome),
            Resolution::LaunchFailure(reason) => {
                Err(PaymentError::Launch(reason.clone().into()))
            }
        }
    }
}
