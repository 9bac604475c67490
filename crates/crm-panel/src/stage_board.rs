use crate::{PanelError, Result as PanelResult};

use std::collections::HashMap;

use crm_core::{DEFAULT_STAGE_ID, Deal, LOCKED_STAGE_IDS, STAGE_COLOR_PALETTE, Stage, StageId};
use log::debug;

/// Copy of the partition map taken before an optimistic mutation.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    partitions: HashMap<StageId, Vec<Deal>>,
    revision: u64,
}

impl BoardSnapshot {
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// In-memory pipeline board: stage ordering plus deals partitioned by stage.
///
/// Movable stages keep their user-defined order; the locked stages always
/// come last, in their fixed relative order. Every stage owns a partition
/// (empty or not), and every deal sits in exactly one partition.
#[derive(Debug, Default)]
pub struct StageBoard {
    movable: Vec<Stage>,
    locked: Vec<Stage>,
    partitions: HashMap<StageId, Vec<Deal>>,
    /// Stage currently presented with an inline title editor.
    editing: Option<StageId>,
    /// Bumped on every partition mutation; guards snapshot restores.
    revision: u64,
}

impl StageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole board with freshly fetched stages and partitions.
    pub fn seed(&mut self, stages: Vec<Stage>, partitions: HashMap<StageId, Vec<Deal>>) {
        self.locked = LOCKED_STAGE_IDS
            .iter()
            .filter_map(|id| stages.iter().find(|s| s.id == *id).cloned())
            .collect();
        self.movable = stages
            .into_iter()
            .filter(|s| !Stage::is_locked_id(&s.id))
            .collect();
        self.partitions = partitions;
        self.ensure_partitions();
        self.revision += 1;
    }

    /// Replace only the partitions, e.g. after a revert refetch.
    pub fn replace_partitions(&mut self, partitions: HashMap<StageId, Vec<Deal>>) {
        self.partitions = partitions;
        self.ensure_partitions();
        self.revision += 1;
    }

    /// Movable stages in user order, then the locked stages in their
    /// fixed canonical order.
    pub fn list_stages(&self) -> Vec<&Stage> {
        self.movable.iter().chain(self.locked.iter()).collect()
    }

    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.movable
            .iter()
            .chain(self.locked.iter())
            .find(|s| s.id == id)
    }

    pub fn contains_stage(&self, id: &str) -> bool {
        self.stage(id).is_some()
    }

    /// Append a new movable stage with a random palette color and put it
    /// in renaming mode for the caller's inline editor.
    pub fn add_stage(&mut self, title: &str) -> Stage {
        let color = STAGE_COLOR_PALETTE[rand::random_range(0..STAGE_COLOR_PALETTE.len())];
        let stage = Stage::new(title.to_string(), color.to_string());

        self.partitions.insert(stage.id.clone(), Vec::new());
        self.editing = Some(stage.id.clone());
        self.movable.push(stage.clone());
        self.revision += 1;

        debug!("Stage added: {} ({})", stage.title, stage.id);
        stage
    }

    /// Stage currently in renaming mode, if any.
    pub fn editing_stage(&self) -> Option<&StageId> {
        self.editing.as_ref()
    }

    /// Retitle a movable stage. Empty titles and locked or unknown ids are
    /// a silent no-op; renaming mode ends either way.
    pub fn rename_stage(&mut self, id: &str, new_title: &str) {
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }

        let trimmed = new_title.trim();
        if trimmed.is_empty() || Stage::is_locked_id(id) {
            debug!("Rename ignored for stage {id}");
            return;
        }

        if let Some(stage) = self.movable.iter_mut().find(|s| s.id == id) {
            stage.title = trimmed.to_string();
        }
    }

    /// Delete a movable stage. Its deals are reassigned (appended) to the
    /// default stage rather than dropped; the reassigned deals are
    /// returned so the caller can report them.
    ///
    /// Confirmation is the caller's concern, not a board constraint.
    pub fn delete_stage(&mut self, id: &str) -> PanelResult<Vec<Deal>> {
        if Stage::is_locked_id(id) {
            return Err(PanelError::locked_stage(id));
        }

        let position = self
            .movable
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| PanelError::unknown_stage(id))?;

        self.movable.remove(position);
        let orphans = self.partitions.remove(id).unwrap_or_default();

        // Orphans land in the default stage; when the default stage is the
        // one being deleted, the first remaining stage takes them.
        let destination = if self.contains_stage(DEFAULT_STAGE_ID) {
            DEFAULT_STAGE_ID.to_string()
        } else {
            match self.movable.first().or(self.locked.first()) {
                Some(stage) => stage.id.clone(),
                None => {
                    self.revision += 1;
                    return Ok(Vec::new());
                }
            }
        };

        let reassigned: Vec<Deal> = orphans
            .into_iter()
            .map(|mut deal| {
                deal.stage = destination.clone();
                deal
            })
            .collect();

        self.partitions
            .entry(destination)
            .or_default()
            .extend(reassigned.iter().cloned());

        self.revision += 1;

        debug!("Stage {id} deleted, {} deals reassigned", reassigned.len());
        Ok(reassigned)
    }

    /// Splice a movable stage to another movable stage's position: both
    /// indices are taken before removal, then the moved stage is removed
    /// and reinserted at the target's index. Locked, unknown or identical
    /// ids are a no-op. Returns whether the order changed.
    pub fn reorder_stage(&mut self, moved_id: &str, target_id: &str) -> bool {
        if moved_id == target_id
            || Stage::is_locked_id(moved_id)
            || Stage::is_locked_id(target_id)
        {
            return false;
        }

        let Some(from) = self.movable.iter().position(|s| s.id == moved_id) else {
            return false;
        };
        let Some(to) = self.movable.iter().position(|s| s.id == target_id) else {
            return false;
        };

        let stage = self.movable.remove(from);
        self.movable.insert(to, stage);
        self.revision += 1;

        true
    }

    pub fn deals_by_stage(&self) -> &HashMap<StageId, Vec<Deal>> {
        &self.partitions
    }

    pub fn deals_in(&self, stage_id: &str) -> &[Deal] {
        self.partitions.get(stage_id).map_or(&[], Vec::as_slice)
    }

    pub fn find_deal(&self, deal_id: &str) -> Option<&Deal> {
        self.partitions
            .values()
            .flat_map(|deals| deals.iter())
            .find(|d| d.id == deal_id)
    }

    /// Sum of deal values in one partition (the column header figure).
    pub fn stage_total(&self, stage_id: &str) -> f64 {
        self.deals_in(stage_id).iter().map(|d| d.value).sum()
    }

    /// Move a deal between partitions: removed from `from`, appended to
    /// `to` with its stage reassigned. Returns false when the deal is not
    /// in the source partition.
    pub fn move_deal(&mut self, deal_id: &str, from: &str, to: &str) -> bool {
        let Some(source) = self.partitions.get_mut(from) else {
            return false;
        };
        let Some(position) = source.iter().position(|d| d.id == deal_id) else {
            return false;
        };

        let mut deal = source.remove(position);
        deal.stage = to.to_string();
        self.partitions.entry(to.to_string()).or_default().push(deal);
        self.revision += 1;

        true
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            partitions: self.partitions.clone(),
            revision: self.revision,
        }
    }

    /// Restore a snapshot's partitions. The revision keeps advancing so
    /// later snapshots never alias a restored state.
    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        self.partitions = snapshot.partitions;
        self.ensure_partitions();
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Every stage owns a partition, present or not in the source map.
    fn ensure_partitions(&mut self) {
        let ids: Vec<StageId> = self
            .movable
            .iter()
            .chain(self.locked.iter())
            .map(|s| s.id.clone())
            .collect();
        for id in ids {
            self.partitions.entry(id).or_default();
        }
    }
}
