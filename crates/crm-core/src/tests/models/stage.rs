use crate::{DEFAULT_STAGE_ID, LOCKED_STAGE_IDS, Stage, default_stages};

#[test]
fn given_seed_list_when_built_then_six_stages_with_locked_tail() {
    let stages = default_stages();

    assert_eq!(stages.len(), 6);

    let ids: Vec<&str> = stages.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["lead", "qualified", "proposal", "marketing", "won", "lost"]
    );

    for stage in &stages {
        assert_eq!(stage.locked, LOCKED_STAGE_IDS.contains(&stage.id.as_str()));
    }
}

#[test]
fn given_locked_ids_when_checked_then_only_the_three_mirrored_stages_match() {
    assert!(Stage::is_locked_id("marketing"));
    assert!(Stage::is_locked_id("won"));
    assert!(Stage::is_locked_id("lost"));
    assert!(!Stage::is_locked_id(DEFAULT_STAGE_ID));
    assert!(!Stage::is_locked_id("proposal"));
}

#[test]
fn given_new_stage_when_created_then_unlocked_with_fresh_id() {
    let a = Stage::new("Nova Etapa".to_string(), "bg-teal-500".to_string());
    let b = Stage::new("Nova Etapa".to_string(), "bg-teal-500".to_string());

    assert!(!a.locked);
    assert!(a.id.starts_with("stage-"));
    assert_ne!(a.id, b.id);
}
