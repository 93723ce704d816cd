use std::io::Write;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use timeline::{
    Clock, Driver, Feature, GenerationState, MonotonicClock, Mutation, ProjectType, Script, Settings, SettingsDraft,
    Theme, Variant,
};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("speed must be a positive finite number that keeps every delay representable, got {0}")]
    InvalidSpeed(f64),
    #[error("replay cancelled after {applied} of {total} steps")]
    Cancelled { applied: usize, total: usize },
    #[error("failed to listen for ctrl-c: {0}")]
    Signal(#[from] std::io::Error),
    #[error("failed to write replay output: {0}")]
    Output(std::io::Error),
    #[error("failed to encode script: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "builder-cli", about = "Inspect and replay Product Builder timelines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a timeline script as JSON.
    Script(ScriptArgs),
    /// Play a timeline in real time, one line per applied step.
    Replay(ReplayArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Primary,
    Walkthrough,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Primary => Variant::Primary,
            VariantArg::Walkthrough => Variant::Walkthrough,
        }
    }
}

#[derive(Args, Debug)]
struct SettingsArgs {
    #[arg(long, value_enum, default_value = "primary")]
    variant: VariantArg,

    /// Project name; defaults to the form's preset.
    #[arg(long)]
    name: Option<String>,

    /// Project type tag (`web-app`, `dashboard`, ...).
    #[arg(long = "type", value_parser = parse_project_type)]
    project_type: Option<ProjectType>,

    /// Feature tag; repeat for several. Replaces the preset list.
    #[arg(long = "feature", value_parser = parse_feature)]
    features: Vec<Feature>,

    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Seed for the walkthrough's snippet picks.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ScriptArgs {
    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Playback rate; 2.0 plays twice as fast.
    #[arg(long, env = "BUILDER_SPEED", default_value_t = 1.0)]
    speed: f64,
}

fn parse_project_type(raw: &str) -> Result<ProjectType, String> {
    ProjectType::from_tag(raw).ok_or_else(|| format!("unknown project type `{raw}`"))
}

fn parse_feature(raw: &str) -> Result<Feature, String> {
    Feature::from_tag(raw).ok_or_else(|| format!("unknown feature `{raw}`"))
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    Theme::from_tag(raw).ok_or_else(|| format!("unknown theme `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Script(args) => run_script(&args),
        Command::Replay(args) => run_replay(&args).await,
    }
}

/// Overlay the flags on the form preset and validate like a form submit.
fn build_settings(args: &SettingsArgs) -> Result<Settings, CliError> {
    let mut draft = SettingsDraft::default();
    if let Some(name) = &args.name {
        draft.project_name.clone_from(name);
    }
    if let Some(project_type) = args.project_type {
        draft.project_type = project_type;
    }
    if !args.features.is_empty() {
        draft.features.clear();
        for feature in &args.features {
            if !draft.has_feature(*feature) {
                draft.toggle_feature(*feature);
            }
        }
    }
    if let Some(theme) = args.theme {
        draft.theme = theme;
    }
    draft.submit().map_err(|errors| {
        let messages: Vec<&str> = [errors.project_name, errors.features].into_iter().flatten().collect();
        CliError::InvalidSettings(messages.join("; "))
    })
}

fn build_script(args: &SettingsArgs) -> Result<Script, CliError> {
    let settings = build_settings(args)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(Script::for_variant(args.variant.into(), &settings, &mut rng))
}

fn run_script(args: &ScriptArgs) -> Result<(), CliError> {
    let script = build_script(&args.settings)?;
    println!("{}", serde_json::to_string_pretty(&script)?);
    Ok(())
}

async fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    replay_into(args, &mut std::io::stdout()).await?;
    Ok(())
}

/// Play the script against a fresh state, writing one line per mutation.
async fn replay_into<W: Write>(args: &ReplayArgs, out: &mut W) -> Result<GenerationState, CliError> {
    if !(args.speed.is_finite() && args.speed > 0.0) {
        return Err(CliError::InvalidSpeed(args.speed));
    }
    let script = build_script(&args.settings)?;
    if let Some(last) = script.steps.last() {
        scaled(last.at, args.speed)?;
    }
    let total = script.steps.len();
    tracing::info!(variant = ?script.variant, steps = total, speed = args.speed, "replay starting");

    let mut driver = Driver::new(script);
    let mut state = GenerationState::new();
    driver.start(&mut state);
    let clock = MonotonicClock::start();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while let Some(due) = driver.next_due() {
        let wait = scaled(due, args.speed)?.saturating_sub(clock.elapsed());
        tokio::select! {
            () = tokio::time::sleep(wait) => {}
            signal = &mut ctrl_c => {
                signal?;
                driver.cancel();
                return Err(CliError::Cancelled { applied: driver.cursor(), total });
            }
        }

        let first = driver.cursor();
        let mut shown = state.progress;
        let advance = driver.advance_to(&mut state, due);
        for step in &driver.script().steps[first..first + advance.applied] {
            for mutation in &step.mutations {
                if let Mutation::Progress { percent } = mutation {
                    shown = shown.max((*percent).min(100));
                }
                writeln!(out, "[{:>6.1}s] {:>3}%  {}", step.at.as_secs_f64(), shown, describe(mutation))
                    .map_err(CliError::Output)?;
            }
        }
        if advance.completed {
            tracing::info!(at_ms = due.as_millis(), "generation complete");
        }
    }

    writeln!(
        out,
        "stage={:?} progress={}% design={} files={} snippets={}",
        state.stage,
        state.progress,
        state.design_system.len(),
        state.files.len(),
        state.snippets.len()
    )
    .map_err(CliError::Output)?;
    Ok(state)
}

/// Wall-clock delay for a script offset at `speed`.
fn scaled(offset: Duration, speed: f64) -> Result<Duration, CliError> {
    Duration::try_from_secs_f64(offset.as_secs_f64() / speed).map_err(|_| CliError::InvalidSpeed(speed))
}

/// One-line summary of a mutation for the replay log.
fn describe(mutation: &Mutation) -> String {
    match mutation {
        Mutation::AddDesign { entry } => {
            format!("+ design #{} {} ({:?}, {:?})", entry.id, entry.name, entry.category, entry.status)
        }
        Mutation::SetDesignStatus { id, status } => format!("~ design #{id} -> {status:?}"),
        Mutation::AddFile { entry } => {
            format!("+ file #{} {}/{} ({}, {:?})", entry.id, entry.path, entry.name, entry.kind.tag(), entry.status)
        }
        Mutation::SetFileStatus { id, status } => format!("~ file #{id} -> {status:?}"),
        Mutation::AddSnippet { snippet } => format!("+ snippet #{} {} ({})", snippet.id, snippet.title, snippet.language),
        Mutation::Progress { percent } => format!("progress {percent}%"),
        Mutation::SetPhase { phase } => format!("phase -> {phase:?}"),
        Mutation::Complete => "complete".to_owned(),
    }
}
