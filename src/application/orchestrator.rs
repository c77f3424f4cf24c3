use tracing::{debug, error, info, warn};

use crate::LOG_TARGET;
use crate::domain::outcome::TransactionOutcome;
use crate::domain::ports::{AuthorizationBundle, AuthorizationGatewayBox, PresentationContext};
use crate::domain::redact::mask_email;
use crate::domain::request::{FlowConfig, NormalizedRequest, PaymentRequest};
use crate::domain::validation;
use crate::error::{PaymentError, Result};

/// Runs one payment-initiation attempt end to end.
///
/// `TransactionOrchestrator` sequences validation, normalization, redacted
/// diagnostic logging, and the delegation to the injected authorization
/// gateway, then maps the gateway's terminal signal back to the caller. It
/// owns the gateway and the configured fallbacks; it holds no per-attempt
/// state, so one instance can serve any number of attempts.
pub struct TransactionOrchestrator {
    gateway: AuthorizationGatewayBox,
    config: FlowConfig,
}

impl TransactionOrchestrator {
    /// Creates an orchestrator with the default fallbacks.
    pub fn new(gateway: AuthorizationGatewayBox) -> Self {
        Self::with_config(gateway, FlowConfig::default())
    }

    /// Creates an orchestrator with caller-supplied fallbacks.
    pub fn with_config(gateway: AuthorizationGatewayBox, config: FlowConfig) -> Self {
        Self { gateway, config }
    }

    /// Runs one attempt and resolves to its terminal outcome.
    ///
    /// Any validation violation aborts before the gateway is reached and
    /// surfaces the aggregated report as `PaymentError::Validation`. A
    /// failure while launching the flow is logged with its diagnostic and
    /// re-surfaced unchanged; it is not a `NotCompleted` outcome. No retries
    /// are performed; a rejected or failed attempt needs a fresh request.
    pub async fn initiate(
        &self,
        request: &PaymentRequest,
        context: Option<&PresentationContext>,
    ) -> Result<TransactionOutcome> {
        let report = validation::validate(request, context);
        // A valid report guarantees both the context and the credential are
        // present; all three checks collapse into one guard.
        let (true, Some(context), Some(credential)) = (
            report.is_valid(),
            context,
            request.auth_credential.as_deref(),
        ) else {
            warn!(
                target: LOG_TARGET,
                violations = report.violations().len(),
                "payment request rejected"
            );
            return Err(PaymentError::Validation(report));
        };

        let normalized = NormalizedRequest::from_validated(request, &self.config);
        let reference = normalized.reference.clone();

        info!(target: LOG_TARGET, reference = %reference, "initiating payment authorization");
        debug!(
            target: LOG_TARGET,
            email = %mask_email(&normalized.email),
            amount = %normalized.amount,
            currency = %normalized.currency,
            reference = %reference,
            has_metadata = normalized.metadata.is_some(),
            "payment attempt summary"
        );

        let callback_url = request
            .callback_url
            .clone()
            .unwrap_or_else(|| self.config.default_callback_url.clone());
        let bundle =
            AuthorizationBundle::from_normalized(normalized, callback_url, credential.to_string());

        let outcome = match self.gateway.authorize(bundle, context).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    target: LOG_TARGET,
                    reference = %reference,
                    error = %err,
                    "authorization flow failed to launch"
                );
                return Err(err);
            }
        };

        match outcome {
            TransactionOutcome::Completed => {
                info!(target: LOG_TARGET, reference = %reference, "payment authorization completed");
            }
            TransactionOutcome::NotCompleted => {
                warn!(
                    target: LOG_TARGET,
                    reference = %reference,
                    "payment authorization not completed"
                );
            }
        }

        Ok(outcome)
    }

    /// Callback-style wrapper over [`initiate`](Self::initiate).
    ///
    /// Exactly one handler fires per resolved attempt; neither fires when
    /// the attempt errors before resolving.
    pub async fn initiate_with_handlers<C, N>(
        &self,
        request: &PaymentRequest,
        context: Option<&PresentationContext>,
        on_completed: C,
        on_not_completed: N,
    ) -> Result<TransactionOutcome>
    where
        C: FnOnce(),
        N: FnOnce(),
    {
        let outcome = self.initiate(request, context).await?;
        match outcome {
            TransactionOutcome::Completed => on_completed(),
            TransactionOutcome::NotCompleted => on_not_completed(),
        }
        Ok(outcome)
    }
}
