use super::*;
use crate::model::{DesignCategory, FileKind};

fn design(id: u32) -> DesignSystemEntry {
    DesignSystemEntry {
        id,
        name: format!("Token {id}"),
        description: String::new(),
        category: DesignCategory::Color,
        status: DesignStatus::Thinking,
    }
}

fn file(id: u32, status: FileStatus) -> FileEntry {
    FileEntry {
        id,
        name: format!("File{id}.tsx"),
        path: "/components".to_owned(),
        kind: FileKind::Component,
        status,
        description: None,
        content: None,
    }
}

#[test]
fn begin_resets_lists_and_enters_processing() {
    let mut state = GenerationState::new();
    state.apply(&Mutation::AddDesign { entry: design(1) }).unwrap();
    state.apply(&Mutation::Progress { percent: 40 }).unwrap();
    state.begin();
    assert_eq!(state.stage, Stage::Processing);
    assert_eq!(state.progress, 0);
    assert!(state.design_system.is_empty());
}

#[test]
fn set_design_status_targets_only_matching_id() {
    let mut state = GenerationState::new();
    state.apply(&Mutation::AddDesign { entry: design(1) }).unwrap();
    state.apply(&Mutation::AddDesign { entry: design(2) }).unwrap();
    state.apply(&Mutation::SetDesignStatus { id: 1, status: DesignStatus::Decided }).unwrap();
    assert_eq!(state.design_entry(1).unwrap().status, DesignStatus::Decided);
    assert_eq!(state.design_entry(2).unwrap().status, DesignStatus::Thinking);
}

#[test]
fn status_update_for_missing_entry_is_rejected() {
    let mut state = GenerationState::new();
    assert_eq!(
        state.apply(&Mutation::SetFileStatus { id: 9, status: FileStatus::Complete }),
        Err(ReduceError::UnknownFile(9))
    );
    assert_eq!(
        state.apply(&Mutation::SetDesignStatus { id: 3, status: DesignStatus::Decided }),
        Err(ReduceError::UnknownDesignEntry(3))
    );
}

#[test]
fn file_status_cannot_regress() {
    let mut state = GenerationState::new();
    state.apply(&Mutation::AddFile { entry: file(1, FileStatus::Complete) }).unwrap();
    let err = state
        .apply(&Mutation::SetFileStatus { id: 1, status: FileStatus::Pending })
        .unwrap_err();
    assert_eq!(err, ReduceError::FileRegression { id: 1, from: FileStatus::Complete, to: FileStatus::Pending });
    assert_eq!(state.file(1).unwrap().status, FileStatus::Complete);
}

#[test]
fn same_step_file_mutations_compose() {
    // A status update and an append in one step both survive.
    let mut state = GenerationState::new();
    state.apply(&Mutation::AddFile { entry: file(3, FileStatus::Generating) }).unwrap();
    for m in [
        Mutation::SetFileStatus { id: 3, status: FileStatus::Complete },
        Mutation::AddFile { entry: file(5, FileStatus::Generating) },
    ] {
        state.apply(&m).unwrap();
    }
    assert_eq!(state.file(3).unwrap().status, FileStatus::Complete);
    assert_eq!(state.file(5).unwrap().status, FileStatus::Generating);
}

#[test]
fn progress_is_monotonic_and_capped() {
    let mut state = GenerationState::new();
    state.apply(&Mutation::Progress { percent: 30 }).unwrap();
    state.apply(&Mutation::Progress { percent: 12 }).unwrap();
    assert_eq!(state.progress, 30);
    state.apply(&Mutation::Progress { percent: 250 }).unwrap();
    assert_eq!(state.progress, 100);
}

#[test]
fn complete_moves_stage() {
    let mut state = GenerationState::new();
    state.begin();
    state.apply(&Mutation::Complete).unwrap();
    assert_eq!(state.stage, Stage::Complete);
}

#[test]
fn mutation_serializes_with_op_tag() {
    let json = serde_json::to_value(Mutation::Progress { percent: 5 }).unwrap();
    assert_eq!(json, serde_json::json!({ "op": "progress", "percent": 5 }));
}
