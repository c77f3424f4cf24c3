use payflow::application::orchestrator::TransactionOrchestrator;
use payflow::domain::outcome::TransactionOutcome;
use payflow::domain::ports::{AuthorizationGatewayBox, PresentationContext};
use payflow::domain::request::PaymentRequest;
use payflow::infrastructure::scripted::ScriptedAuthorizationGateway;

fn request(reference: &str) -> PaymentRequest {
    PaymentRequest {
        customer_email: "ada@example.com".to_string(),
        amount: "10.00".to_string(),
        reference: reference.to_string(),
        callback_url: None,
        auth_credential: Some("sk_live_abc123".to_string()),
        currency: None,
        plan: None,
        metadata: None,
    }
}

#[tokio::test]
async fn test_gateway_as_trait_object() {
    let gateway: AuthorizationGatewayBox = Box::new(ScriptedAuthorizationGateway::declining());
    let orchestrator = TransactionOrchestrator::new(gateway);

    let outcome = orchestrator
        .initiate(&request("order-1"), Some(&PresentationContext::new("test")))
        .await
        .unwrap();
    assert_eq!(outcome, TransactionOutcome::NotCompleted);
}

#[tokio::test]
async fn test_orchestrator_usable_from_spawned_task() {
    let gateway: AuthorizationGatewayBox = Box::new(ScriptedAuthorizationGateway::completing());
    let orchestrator = TransactionOrchestrator::new(gateway);

    // Verify Send by driving an attempt inside a spawned task
    let handle = tokio::spawn(async move {
        orchestrator
            .initiate(&request("order-2"), Some(&PresentationContext::new("task")))
            .await
            .unwrap()
    });

    let outcome = handle.await.unwrap();
    assert_eq!(outcome, TransactionOutcome::Completed);
}
