use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::model::{Feature, ProjectType, Theme};

fn acme() -> Settings {
    Settings {
        project_name: "Acme".to_owned(),
        project_type: ProjectType::Dashboard,
        features: vec![Feature::Auth],
        theme: Theme::Modern,
        email: None,
    }
}

// =============================================================
// primary
// =============================================================

#[test]
fn primary_offsets_match_fixed_schedule() {
    let offsets = Script::primary().steps.iter().map(|s| s.at.as_millis()).collect::<Vec<_>>();
    assert_eq!(offsets, vec![3000, 8000, 15000, 22000, 30000, 40000, 50000, 65000, 80000, 95000]);
}

#[test]
fn primary_never_completes_and_caps_progress() {
    let script = Script::primary();
    assert!(!script.completes());
    let max = script
        .steps
        .iter()
        .flat_map(|s| &s.mutations)
        .filter_map(|m| match m {
            Mutation::Progress { percent } => Some(*percent),
            _ => None,
        })
        .max();
    assert_eq!(max, Some(94));
    assert_eq!(script.duration(), Duration::from_secs(95));
}

// =============================================================
// walkthrough
// =============================================================

#[test]
fn walkthrough_streams_labels_then_files_then_completes() {
    let mut rng = StdRng::seed_from_u64(1);
    let script = Script::walkthrough(&acme(), &mut rng);
    // 8 labels + phase switch + 7 files + completion.
    assert_eq!(script.steps.len(), 17);
    assert_eq!(script.steps[0].at, Duration::from_millis(2200));
    assert_eq!(script.steps[7].at, Duration::from_millis(7100));
    assert_eq!(script.steps[8].at, Duration::from_millis(8800));
    assert_eq!(script.steps[9].at, Duration::from_millis(10000));
    assert_eq!(script.steps[15].at, Duration::from_millis(17200));
    assert_eq!(script.duration(), Duration::from_millis(20400));
    assert!(script.completes());
}

#[test]
fn walkthrough_file_names_embed_project_name() {
    let mut rng = StdRng::seed_from_u64(1);
    let script = Script::walkthrough(&acme(), &mut rng);
    let names = script
        .steps
        .iter()
        .flat_map(|s| &s.mutations)
        .filter_map(|m| match m {
            Mutation::AddFile { entry } => Some(entry.name.clone()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["tailwind.config.ts", "AcmeButton.tsx", "AcmeCard.tsx", "utils.ts", "theme.css", "Dashboard.tsx", "api.ts"]
    );
}

#[test]
fn walkthrough_files_carry_snippet_from_matching_pool() {
    let mut rng = StdRng::seed_from_u64(99);
    let script = Script::walkthrough(&acme(), &mut rng);
    for m in script.steps.iter().flat_map(|s| &s.mutations) {
        if let Mutation::AddFile { entry } = m {
            let content = entry.content.as_deref().unwrap();
            let pool = SnippetCategory::for_file(entry.kind).pool();
            assert!(pool.contains(&content), "{} has foreign snippet", entry.name);
        }
    }
}

#[test]
fn file_progress_rounds_like_percentages() {
    let values = (0..7).map(|i| file_progress(i, 7)).collect::<Vec<_>>();
    assert_eq!(values, vec![14, 29, 43, 57, 71, 86, 100]);
    assert_eq!(file_progress(0, 0), 100);
}

// =============================================================
// ordering + serde
// =============================================================

#[test]
fn new_sorts_steps_by_offset_stably() {
    let script = Script::new(
        Variant::Primary,
        vec![
            Step::new(500, vec![Mutation::Progress { percent: 2 }]),
            Step::new(100, vec![Mutation::Progress { percent: 1 }]),
            Step::new(500, vec![Mutation::Progress { percent: 3 }]),
        ],
    );
    let seq = script
        .steps
        .iter()
        .map(|s| match s.mutations[0] {
            Mutation::Progress { percent } => percent,
            _ => 0,
        })
        .collect::<Vec<_>>();
    assert_eq!(seq, vec![1, 2, 3]);
}

#[test]
fn step_offsets_serialize_as_millis() {
    let json = serde_json::to_value(Step::new(3000, Vec::new())).unwrap();
    assert_eq!(json, serde_json::json!({ "at": 3000, "mutations": [] }));
}
