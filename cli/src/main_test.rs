use super::*;
use timeline::Stage;

fn args(extra: &[&str]) -> SettingsArgs {
    let mut argv = vec!["builder-cli", "script"];
    argv.extend_from_slice(extra);
    match Cli::parse_from(argv).command {
        Command::Script(a) => a.settings,
        Command::Replay(_) => unreachable!(),
    }
}

#[test]
fn defaults_match_the_form_preset() {
    let settings = build_settings(&args(&[])).unwrap();
    assert_eq!(settings.project_name, "React Dashboard");
    assert_eq!(settings.project_type, ProjectType::Dashboard);
    assert_eq!(settings.features.len(), 4);
    assert_eq!(settings.theme, Theme::Modern);
}

#[test]
fn flags_override_the_preset() {
    let settings =
        build_settings(&args(&["--name", "Acme", "--type", "blog", "--feature", "auth", "--theme", "playful"])).unwrap();
    assert_eq!(settings.project_name, "Acme");
    assert_eq!(settings.project_type, ProjectType::Blog);
    assert_eq!(settings.features, vec![Feature::Auth]);
    assert_eq!(settings.theme, Theme::Playful);
}

#[test]
fn repeated_feature_is_kept_once() {
    let settings = build_settings(&args(&["--feature", "api", "--feature", "api"])).unwrap();
    assert_eq!(settings.features, vec![Feature::Api]);
}

#[test]
fn blank_name_is_rejected_like_the_form() {
    let err = build_settings(&args(&["--name", "   "])).unwrap_err();
    assert!(matches!(err, CliError::InvalidSettings(ref msg) if msg == "Project name is required"));
}

#[test]
fn unknown_tags_fail_to_parse() {
    assert!(Cli::try_parse_from(["builder-cli", "script", "--theme", "neon"]).is_err());
    assert!(Cli::try_parse_from(["builder-cli", "script", "--type", "web app"]).is_err());
}

#[test]
fn seeded_walkthrough_scripts_are_reproducible() {
    let a = build_script(&args(&["--variant", "walkthrough", "--seed", "7"])).unwrap();
    let b = build_script(&args(&["--variant", "walkthrough", "--seed", "7"])).unwrap();
    assert_eq!(a, b);
    assert!(a.completes());
}

#[test]
fn script_json_tags_mutations() {
    let script = build_script(&args(&[])).unwrap();
    let json = serde_json::to_value(&script).unwrap();
    assert_eq!(json["variant"], "primary");
    assert_eq!(json["steps"][0]["at"], 3000);
    assert_eq!(json["steps"][0]["mutations"][0]["op"], "add_design");
}

#[test]
fn scaled_divides_by_speed() {
    assert_eq!(scaled(Duration::from_millis(3000), 2.0).unwrap(), Duration::from_millis(1500));
    assert_eq!(scaled(Duration::from_millis(3000), 1.0).unwrap(), Duration::from_millis(3000));
}

#[test]
fn scaled_rejects_unrepresentable_delays() {
    assert!(matches!(scaled(Duration::from_millis(3000), 1e-300), Err(CliError::InvalidSpeed(_))));
}

#[test]
fn describe_reads_like_a_log_line() {
    assert_eq!(describe(&Mutation::Progress { percent: 42 }), "progress 42%");
    assert_eq!(describe(&Mutation::Complete), "complete");
    assert_eq!(
        describe(&Mutation::SetFileStatus { id: 3, status: timeline::FileStatus::Complete }),
        "~ file #3 -> Complete"
    );
}

#[tokio::test]
async fn replay_rejects_non_positive_speed() {
    let replay = ReplayArgs { settings: args(&[]), speed: 0.0 };
    assert!(matches!(run_replay(&replay).await, Err(CliError::InvalidSpeed(_))));
}

#[tokio::test]
async fn replay_rejects_speed_too_small_to_schedule() {
    let replay = ReplayArgs { settings: args(&[]), speed: 1e-300 };
    let mut out = Vec::new();
    assert!(matches!(replay_into(&replay, &mut out).await, Err(CliError::InvalidSpeed(_))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn fast_primary_replay_stalls_at_94_percent() {
    let replay = ReplayArgs { settings: args(&[]), speed: 1_000_000.0 };
    let mut out = Vec::new();
    let state = replay_into(&replay, &mut out).await.unwrap();
    assert_eq!(state.stage, Stage::Processing);
    assert_eq!(state.progress, 94);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("[   3.0s]   0%  + design #1 Color Palette"));
    assert!(lines[1].starts_with("[   3.0s]   0%  + design #2 Typography"));
    assert_eq!(lines[2], "[   3.0s]   5%  progress 5%");
    assert!(lines.last().unwrap().starts_with("stage=Processing progress=94%"));
}

#[tokio::test]
async fn fast_walkthrough_replay_completes() {
    let replay = ReplayArgs { settings: args(&["--variant", "walkthrough", "--seed", "7"]), speed: 1_000_000.0 };
    let mut out = Vec::new();
    let state = replay_into(&replay, &mut out).await.unwrap();
    assert_eq!(state.stage, Stage::Complete);
    assert_eq!(state.progress, 100);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().filter(|line| line.ends_with("  complete")).count(), 1);
    assert!(text.lines().last().unwrap().starts_with("stage=Complete progress=100% design=8 files=7"));
}
