use crate::{LeadIntake, LeadSubmission, NotificationKind, Notifier};

use crm_core::NewLeadRequest;
use crm_service::CrmService;

fn request(name: &str, email: Option<&str>, phone: Option<&str>) -> NewLeadRequest {
    NewLeadRequest {
        full_name: name.to_string(),
        email: email.map(str::to_string),
        phone: phone.map(str::to_string),
        value: Some(3000.0),
        inbox_id: 1,
        start_conversation: false,
    }
}

fn intake() -> (LeadIntake, CrmService, tokio::sync::mpsc::UnboundedReceiver<crate::Notification>)
{
    let service = CrmService::seeded();
    let (notifier, notifications) = Notifier::channel();
    (LeadIntake::new(service.clone(), notifier), service, notifications)
}

#[test]
fn given_name_and_email_or_phone_when_validated_then_ok() {
    assert!(LeadIntake::validate(&request("Diego", Some("d@example.com"), None)).is_ok());
    assert!(LeadIntake::validate(&request("Diego", None, Some("+55 11 90000-0000"))).is_ok());
}

#[test]
fn given_missing_name_or_reachability_when_validated_then_rejected() {
    assert!(LeadIntake::validate(&request("  ", Some("d@example.com"), None)).is_err());
    assert!(LeadIntake::validate(&request("Diego", None, None)).is_err());
    assert!(LeadIntake::validate(&request("Diego", Some("  "), Some(""))).is_err());
}

#[tokio::test]
async fn given_invalid_form_when_submitted_then_invalid_with_error_notification() {
    let (intake, _service, mut notifications) = intake();

    let submission = intake.submit(&request("Diego", None, None)).await;

    assert!(matches!(submission, LeadSubmission::Invalid { .. }));
    assert_eq!(notifications.try_recv().unwrap().kind, NotificationKind::Error);
}

#[tokio::test]
async fn given_existing_email_when_submitted_then_duplicate_with_matched_contact() {
    let (intake, _service, mut notifications) = intake();

    let submission = intake
        .submit(&request("Ana Bis", Some("ana.silva@example.com"), None))
        .await;

    assert_eq!(
        submission,
        LeadSubmission::Duplicate {
            contact_id: Some("1".to_string())
        }
    );
    assert_eq!(notifications.try_recv().unwrap().kind, NotificationKind::Error);
}

#[tokio::test]
async fn given_fresh_lead_when_submitted_then_created_and_deal_lands_in_lead_stage() {
    let (intake, service, mut notifications) = intake();

    let submission = intake
        .submit(&request("Diego Rocha", Some("diego@example.com"), None))
        .await;

    let LeadSubmission::Created(receipt) = submission else {
        panic!("expected created submission");
    };

    let grouped = service.fetch_deals_grouped_by_stage().await.unwrap();
    assert!(grouped["lead"].iter().any(|d| d.id == receipt.deal_id));

    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Lead criado com sucesso!");
}

#[tokio::test]
async fn given_service_rejection_when_submitted_then_failed_with_error_notification() {
    let (intake, service, mut notifications) = intake();

    service.fault_injector().fail_next();
    let submission = intake
        .submit(&request("Diego Rocha", Some("diego@example.com"), None))
        .await;

    assert_eq!(submission, LeadSubmission::Failed);
    assert_eq!(notifications.try_recv().unwrap().kind, NotificationKind::Error);
}

#[tokio::test]
async fn given_seeded_service_when_inboxes_listed_then_three_channels() {
    let (intake, _service, _notifications) = intake();

    let inboxes = intake.inboxes().await.unwrap();

    assert_eq!(inboxes.len(), 3);
    assert!(inboxes.iter().any(|i| i.name == "WhatsApp"));
}
