use crm_core::{Deal, Stage, StageId};

use log::debug;

/// What the pointer is carrying. Card bodies and column headers are both
/// drag sources, but a single gesture carries exactly one subject.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSubject {
    Deal(Deal),
    Stage(Stage),
}

/// The single drag-session slot: one subject in flight at most, plus the
/// current hover target used for drop-zone highlighting.
#[derive(Debug, Default)]
pub struct DragSession {
    subject: Option<DragSubject>,
    hover: Option<StageId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a deal card.
    pub fn begin_deal(&mut self, deal: Deal) {
        debug!("Dragging deal {}", deal.id);
        self.subject = Some(DragSubject::Deal(deal));
        self.hover = None;
    }

    /// Start dragging a stage column. Locked columns cannot be picked up;
    /// the session stays idle and false is returned.
    pub fn begin_stage(&mut self, stage: Stage) -> bool {
        if stage.locked {
            debug!("Ignoring drag of locked stage {}", stage.id);
            return false;
        }

        debug!("Dragging stage {}", stage.id);
        self.subject = Some(DragSubject::Stage(stage));
        self.hover = None;
        true
    }

    /// Update the hover target. Returns true when the target changed and
    /// the drop zones need re-rendering; re-entering the current target
    /// or hovering with nothing in flight is a no-op.
    pub fn drag_over(&mut self, stage_id: &str) -> bool {
        if self.subject.is_none() || self.hover.as_deref() == Some(stage_id) {
            return false;
        }

        self.hover = Some(stage_id.to_string());
        true
    }

    pub fn drag_leave(&mut self) {
        self.hover = None;
    }

    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn subject(&self) -> Option<&DragSubject> {
        self.subject.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.subject.is_none()
    }

    /// Take the subject out and reset the session to idle. Called on drop.
    pub fn finish(&mut self) -> Option<DragSubject> {
        self.hover = None;
        self.subject.take()
    }

    /// Reset without consuming. Called on drag-end and cancel.
    pub fn cancel(&mut self) {
        self.subject = None;
        self.hover = None;
    }
}
