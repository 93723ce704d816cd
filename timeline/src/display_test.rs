use super::*;
use crate::driver::Driver;
use crate::reducer::GenerationState;
use crate::script::Script;

fn mid_run_state() -> GenerationState {
    let mut driver = Driver::new(Script::primary());
    let mut state = GenerationState::new();
    driver.start(&mut state);
    driver.advance_to(&mut state, std::time::Duration::from_millis(50_000));
    state
}

#[test]
fn rendering_same_lists_twice_is_identical() {
    let state = mid_run_state();
    let snapshot = state.clone();
    assert_eq!(design_rows(&state.design_system), design_rows(&state.design_system));
    assert_eq!(file_rows(&state.files), file_rows(&state.files));
    // Rendering never touches the source lists.
    assert_eq!(state, snapshot);
}

#[test]
fn in_progress_statuses_show_spinner() {
    assert!(design_status(DesignStatus::Thinking).spinner);
    assert!(!design_status(DesignStatus::Decided).spinner);
    assert!(file_status(FileStatus::Generating).spinner);
    assert!(!file_status(FileStatus::Pending).spinner);
    assert!(!file_status(FileStatus::Complete).spinner);
}

#[test]
fn file_status_labels_and_tones() {
    assert_eq!(file_status(FileStatus::Pending).label, "Pending");
    assert_eq!(file_status(FileStatus::Generating).tone, "yellow");
    assert_eq!(file_status(FileStatus::Complete).tone, "green");
}

#[test]
fn layout_and_spacing_share_ruler_icon() {
    assert_eq!(design_icon(DesignCategory::Layout), design_icon(DesignCategory::Spacing));
    assert_eq!(design_icon(DesignCategory::Spacing).icon, "ruler");
}

#[test]
fn file_icon_by_kind() {
    assert_eq!(file_icon(FileKind::Config).icon, "settings");
    assert_eq!(file_icon(FileKind::Page).tone, "green");
    assert_eq!(file_dot(FileKind::Style), "pink");
}

#[test]
fn file_row_state_class_tracks_status() {
    let state = mid_run_state();
    let rows = file_rows(&state.files);
    let classes = rows.iter().map(|r| (r.id, r.state_class)).collect::<Vec<_>>();
    assert_eq!(classes, vec![(1, "done"), (2, "done"), (3, "active"), (4, "done")]);
}

#[test]
fn chip_label_replaces_first_hyphen_only() {
    assert_eq!(chip_label("dark-mode"), "dark mode");
    assert_eq!(chip_label("web-app"), "web app");
    assert_eq!(chip_label("a-b-c"), "a b-c");
    assert_eq!(chip_label("modern"), "modern");
}
