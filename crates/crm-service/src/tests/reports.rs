use crate::ServiceError;
use crate::tests::{empty_service, service};

#[tokio::test]
async fn given_seeded_dataset_when_totals_fetched_then_only_won_is_populated() {
    let service = service();

    let totals = service.fetch_report_totals().await.unwrap();

    assert_eq!(totals.won.count, 1);
    assert_eq!(totals.won.total_value, 5000.0);
    assert_eq!(totals.marketing_return.count, 0);
    assert_eq!(totals.lost.count, 0);
}

#[tokio::test]
async fn given_deal_moved_to_marketing_when_totals_fetched_then_marketing_return_counts_it() {
    let service = service();

    service.write_deal_stage("d1", "marketing").await.unwrap();

    let totals = service.fetch_report_totals().await.unwrap();
    assert_eq!(totals.marketing_return.count, 1);
    assert_eq!(totals.marketing_return.total_value, 15000.0);
}

#[tokio::test]
async fn given_movable_stage_id_when_mirror_rows_fetched_then_not_found() {
    let service = service();

    let result = service.fetch_mirrored_deals("lead").await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn given_seeded_dataset_when_metrics_fetched_then_derived_figures_match() {
    let service = service();

    let metrics = service.fetch_dashboard_metrics().await.unwrap();

    // Bruno is the only contact tagged Lead
    assert_eq!(metrics.lead_count, 1);
    // d1 proposal, d2 qualified, d4 lead; d3 won is excluded
    assert_eq!(metrics.active_deals, 3);
    // 1 of 4 deals won
    assert_eq!(metrics.conversion_rate, 25);
    assert_eq!(metrics.open_tickets, 12);
    assert_eq!(metrics.weekly_performance.len(), 7);
}

#[tokio::test]
async fn given_empty_dataset_when_metrics_fetched_then_conversion_rate_is_zero() {
    let service = empty_service();

    let metrics = service.fetch_dashboard_metrics().await.unwrap();

    assert_eq!(metrics.lead_count, 0);
    assert_eq!(metrics.active_deals, 0);
    assert_eq!(metrics.conversion_rate, 0);
}
