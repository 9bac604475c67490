use crate::dataset::CrmDataset;

use chrono::Utc;
use crm_core::{Deal, MirroredDeal};

/// Mirror-table sync run after every successful stage write.
///
/// The deal's record is removed from all three tables first, then a fresh
/// time-stamped record is inserted iff the new stage is mirrored, so a deal
/// occupies at most one mirror table at any time.
pub(crate) fn sync_deal_to_mirrors(dataset: &mut CrmDataset, deal: &Deal) {
    dataset.mirror_marketing_return.retain(|d| d.id != deal.id);
    dataset.mirror_won.retain(|d| d.id != deal.id);
    dataset.mirror_lost.retain(|d| d.id != deal.id);

    let table = match deal.stage.as_str() {
        "marketing" => &mut dataset.mirror_marketing_return,
        "won" => &mut dataset.mirror_won,
        "lost" => &mut dataset.mirror_lost,
        _ => return,
    };

    table.push(MirroredDeal::of(deal, Utc::now()));
}
