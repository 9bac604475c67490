mod lead_intake;

use crate::{Notification, Notifier, PipelineController, StageBoard};

use std::collections::HashMap;

use chrono::NaiveDate;
use crm_core::{Deal, StageId, default_stages};
use crm_service::CrmService;
use tokio::sync::mpsc::UnboundedReceiver;

/// Board seeded with the six default stages and no deals.
pub(crate) fn empty_board() -> StageBoard {
    let mut board = StageBoard::new();
    board.seed(default_stages(), HashMap::new());
    board
}

/// Board seeded with the six default stages and the given deals.
pub(crate) fn board_with_deals(deals: Vec<Deal>) -> StageBoard {
    let mut partitions: HashMap<StageId, Vec<Deal>> = HashMap::new();
    for deal in deals {
        partitions.entry(deal.stage.clone()).or_default().push(deal);
    }

    let mut board = StageBoard::new();
    board.seed(default_stages(), partitions);
    board
}

pub(crate) fn deal(id: &str, stage: &str, value: f64) -> Deal {
    Deal {
        id: id.to_string(),
        contact_id: "c1".to_string(),
        contact_name: "Ana Silva".to_string(),
        title: format!("Negócio {id}"),
        value,
        stage: stage.to_string(),
        last_contact: NaiveDate::from_ymd_opt(2024, 7, 30).unwrap(),
    }
}

/// Controller over the seeded service, loaded and ready to drag.
pub(crate) async fn loaded_controller() -> (PipelineController, UnboundedReceiver<Notification>) {
    let (notifier, notifications) = Notifier::channel();
    let mut controller = PipelineController::new(CrmService::seeded(), notifier);
    controller.load().await.unwrap();
    (controller, notifications)
}
