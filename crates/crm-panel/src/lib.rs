pub mod contact_workspace;
pub mod drag;
pub mod error;
pub mod lead_intake;
pub mod notifications;
pub mod pipeline;
pub mod stage_board;

pub use contact_workspace::ContactWorkspace;
pub use drag::{DragSession, DragSubject};
pub use error::{PanelError, Result};
pub use lead_intake::{LeadIntake, LeadSubmission};
pub use notifications::{Notification, NotificationKind, Notifier};
pub use pipeline::{DropOutcome, PipelineController, StageChangeOutcome};
pub use stage_board::{BoardSnapshot, StageBoard};

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Create a tracing span for one pipeline interaction.
/// All log entries within the handler will include these fields.
pub fn create_interaction_span(operation: &str, subject_id: &str) -> tracing::Span {
    info_span!(
        "panel_interaction",
        operation = %operation,
        subject_id = %subject_id,
    )
}
