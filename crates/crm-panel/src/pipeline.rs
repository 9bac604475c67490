use crate::drag::{DragSession, DragSubject};
use crate::notifications::Notifier;
use crate::stage_board::StageBoard;
use crate::{PanelError, Result as PanelResult};

use std::collections::HashMap;

use crm_core::{Deal, Stage, StageId};
use crm_service::CrmService;
use log::{debug, info, warn};

/// Confirmed fate of a deal after a stage-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChangeOutcome {
    /// Write confirmed; the optimistic position stands.
    Moved { mirrored: bool },
    /// Write rejected; the board was rolled back.
    Rejected,
    /// Deal was already in the target stage.
    Unchanged,
}

/// What a single drop event did. Both fields are evaluated independently:
/// which one fires depends on the drag subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOutcome {
    pub deal: Option<StageChangeOutcome>,
    pub stage_reordered: bool,
}

/// Translates pipeline intents - drag gestures, stage edits, stage-change
/// requests - into board mutations and service writes.
pub struct PipelineController {
    service: CrmService,
    board: StageBoard,
    drag: DragSession,
    notifier: Notifier,
    /// Latest write sequence issued per deal id; last write wins.
    write_seq: HashMap<String, u64>,
    next_seq: u64,
}

impl PipelineController {
    pub fn new(service: CrmService, notifier: Notifier) -> Self {
        Self {
            service,
            board: StageBoard::new(),
            drag: DragSession::new(),
            notifier,
            write_seq: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Fetch stage definitions and deal partitions and seed the board.
    pub async fn load(&mut self) -> PanelResult<()> {
        let stages = self.service.fetch_stage_definitions().await?;
        let partitions = self.service.fetch_deals_grouped_by_stage().await?;

        let deal_count: usize = partitions.values().map(Vec::len).sum();
        info!(
            "Pipeline loaded: {} stages, {} deals",
            stages.len(),
            deal_count
        );

        self.board.seed(stages, partitions);
        Ok(())
    }

    /// Refetch only the deal partitions, keeping local stage edits.
    pub async fn refresh_deals(&mut self) -> PanelResult<()> {
        let partitions = self.service.fetch_deals_grouped_by_stage().await?;
        self.board.replace_partitions(partitions);
        Ok(())
    }

    pub fn board(&self) -> &StageBoard {
        &self.board
    }

    pub fn service(&self) -> &CrmService {
        &self.service
    }

    pub fn board_mut(&mut self) -> &mut StageBoard {
        &mut self.board
    }

    // ---------------------------------------------------------------------- //
    // Drag session

    pub fn begin_deal_drag(&mut self, deal: Deal) {
        let span = crate::create_interaction_span("deal_drag", &deal.id);
        let _enter = span.enter();
        self.drag.begin_deal(deal);
    }

    /// Pick up a stage column by id. Locked and unknown stages are a no-op.
    pub fn begin_stage_drag(&mut self, stage_id: &str) -> bool {
        let span = crate::create_interaction_span("stage_drag", stage_id);
        let _enter = span.enter();

        match self.board.stage(stage_id) {
            Some(stage) => {
                let stage = stage.clone();
                self.drag.begin_stage(stage)
            }
            None => false,
        }
    }

    pub fn drag_over(&mut self, stage_id: &str) -> bool {
        self.drag.drag_over(stage_id)
    }

    pub fn drag_leave(&mut self) {
        self.drag.drag_leave();
    }

    pub fn end_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    /// Release the pointer over `target_stage_id`.
    ///
    /// The subject decides which branch fires: a dragged deal whose stage
    /// differs from the target triggers the stage-change operation; a
    /// dragged stage splices the movable order unless the target is
    /// locked. The session always ends, whether or not a branch fired.
    pub async fn drop_on(&mut self, target_stage_id: &str) -> PanelResult<DropOutcome> {
        let Some(target) = self.board.stage(target_stage_id).cloned() else {
            self.drag.cancel();
            return Err(PanelError::unknown_stage(target_stage_id));
        };

        let mut outcome = DropOutcome::default();

        match self.drag.finish() {
            Some(DragSubject::Deal(deal)) => {
                if deal.stage != target.id {
                    outcome.deal = Some(self.change_deal_stage(&deal, &target.id).await?);
                }
            }
            Some(DragSubject::Stage(stage)) => {
                if !target.locked {
                    outcome.stage_reordered = self.board.reorder_stage(&stage.id, &target.id);
                }
            }
            None => {}
        }

        Ok(outcome)
    }

    // ---------------------------------------------------------------------- //
    // Stage-change operation

    /// Move a deal to another stage, optimistically: the board reflects
    /// the new position before the service confirms. A rejected write
    /// restores the pre-mutation snapshot (or refetches when another
    /// mutation interleaved) and surfaces an error notification.
    pub async fn change_deal_stage(
        &mut self,
        deal: &Deal,
        new_stage: &StageId,
    ) -> PanelResult<StageChangeOutcome> {
        // 1. Moving onto the current stage is a no-op
        if deal.stage == *new_stage {
            return Ok(StageChangeOutcome::Unchanged);
        }

        // 2. The target must exist on the board
        if !self.board.contains_stage(new_stage) {
            return Err(PanelError::unknown_stage(new_stage));
        }

        // 3. Snapshot, then apply the optimistic move
        let snapshot = self.board.snapshot();
        if !self.board.move_deal(&deal.id, &deal.stage, new_stage) {
            warn!(
                "Stale drag: deal {} no longer in stage {}",
                deal.id, deal.stage
            );
            return Ok(StageChangeOutcome::Unchanged);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.write_seq.insert(deal.id.clone(), seq);

        debug!(
            "Optimistic move of deal {} from {} to {new_stage} (seq {seq})",
            deal.id, deal.stage
        );

        // 4. Confirm with the service
        match self.service.write_deal_stage(&deal.id, new_stage).await {
            Ok(()) => {
                let mirrored = Stage::is_locked_id(new_stage);
                if mirrored {
                    let title = self
                        .board
                        .stage(new_stage)
                        .map_or_else(|| "etapa".to_string(), |s| s.title.clone());
                    self.notifier
                        .success(format!("Movido para \"{title}\" e espelhado nos relatórios."));
                }
                Ok(StageChangeOutcome::Moved { mirrored })
            }
            Err(source) => {
                warn!("Stage write failed for deal {}: {source}", deal.id);
                self.notifier.error("Erro ao atualizar negócio.");

                // 5. Compensate unless a newer write for this deal
                //    superseded the failed one
                if self.write_seq.get(&deal.id) == Some(&seq) {
                    if self.board.revision() == snapshot.revision() + 1 {
                        self.board.restore(snapshot);
                    } else if let Err(e) = self.refresh_deals().await {
                        warn!("Revert refetch failed: {e}");
                    }
                }

                Ok(StageChangeOutcome::Rejected)
            }
        }
    }
}
