use crate::ServiceError;
use crate::tests::service;

use chrono::Utc;

#[tokio::test]
async fn given_seeded_dataset_when_grouped_then_every_seed_stage_is_keyed() {
    let service = service();

    let grouped = service.fetch_deals_grouped_by_stage().await.unwrap();

    for stage_id in ["lead", "qualified", "proposal", "marketing", "won", "lost"] {
        assert!(grouped.contains_key(stage_id), "missing partition {stage_id}");
    }

    assert!(grouped["qualified"].iter().any(|d| d.id == "d2"));
    assert!(grouped["marketing"].is_empty());
}

#[tokio::test]
async fn given_deal_when_stage_written_then_deal_moves_and_mirror_gains_record() {
    let service = service();

    service.write_deal_stage("d2", "won").await.unwrap();

    let grouped = service.fetch_deals_grouped_by_stage().await.unwrap();
    assert!(!grouped["qualified"].iter().any(|d| d.id == "d2"));
    assert!(grouped["won"].iter().any(|d| d.id == "d2"));

    let won = service.fetch_mirrored_deals("won").await.unwrap();
    assert_eq!(won.iter().filter(|d| d.id == "d2").count(), 1);
}

#[tokio::test]
async fn given_stage_write_when_applied_then_last_contact_is_today() {
    let service = service();

    service.write_deal_stage("d4", "qualified").await.unwrap();

    let grouped = service.fetch_deals_grouped_by_stage().await.unwrap();
    let deal = grouped["qualified"].iter().find(|d| d.id == "d4").unwrap();
    assert_eq!(deal.last_contact, Utc::now().date_naive());
}

#[tokio::test]
async fn given_unknown_deal_when_stage_written_then_not_found() {
    let service = service();

    let result = service.write_deal_stage("d999", "won").await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn given_mirrored_deal_when_moved_between_mirrored_stages_then_record_relocates() {
    let service = service();

    service.write_deal_stage("d2", "won").await.unwrap();
    service.write_deal_stage("d2", "lost").await.unwrap();

    let won = service.fetch_mirrored_deals("won").await.unwrap();
    let lost = service.fetch_mirrored_deals("lost").await.unwrap();

    assert!(!won.iter().any(|d| d.id == "d2"));
    assert_eq!(lost.iter().filter(|d| d.id == "d2").count(), 1);
}

#[tokio::test]
async fn given_mirrored_deal_when_moved_to_movable_stage_then_absent_from_all_mirrors() {
    let service = service();

    // d3 is seeded into the won mirror
    service.write_deal_stage("d3", "qualified").await.unwrap();

    for table in ["marketing", "won", "lost"] {
        let rows = service.fetch_mirrored_deals(table).await.unwrap();
        assert!(!rows.iter().any(|d| d.id == "d3"), "d3 lingers in {table}");
    }
}

#[tokio::test]
async fn given_injected_rejection_when_stage_written_then_dataset_is_untouched() {
    let service = service();
    let before = service.fetch_deals_grouped_by_stage().await.unwrap();
    let totals_before = service.fetch_report_totals().await.unwrap();

    service.fault_injector().fail_next();
    let result = service.write_deal_stage("d2", "won").await;
    assert!(matches!(result, Err(ServiceError::Rejected { .. })));

    let after = service.fetch_deals_grouped_by_stage().await.unwrap();
    let totals_after = service.fetch_report_totals().await.unwrap();
    assert_eq!(before, after);
    assert_eq!(totals_before, totals_after);
}

#[tokio::test]
async fn given_one_shot_rejection_when_retried_then_second_write_succeeds() {
    let service = service();

    service.fault_injector().fail_next();
    assert!(service.write_deal_stage("d2", "won").await.is_err());
    assert!(service.write_deal_stage("d2", "won").await.is_ok());
}
