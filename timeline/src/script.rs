//! Timeline scripts: ordered `(offset, mutations)` steps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two scripts exist. The primary script is a fixed ten-step schedule that
//! stops at 94% without ever completing. The walkthrough script streams the
//! design-system labels and seven generated files on short tickers and does
//! complete. Both are plain data; [`crate::driver::Driver`] plays them.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::{BUTTON_PREVIEW, CARD_PREVIEW, DESIGN_LABELS, TAILWIND_PREVIEW};
use crate::model::{
    CodeSnippet, DesignCategory, DesignStatus, DesignSystemEntry, FileEntry, FileKind, FileStatus, Phase,
    Settings,
};
use crate::picker::{SnippetCategory, pick_snippet};
use crate::reducer::Mutation;

/// Walkthrough: delay before the design ticker starts.
pub const WALKTHROUGH_DESIGN_DELAY: Duration = Duration::from_millis(1500);
/// Walkthrough: design ticker period.
pub const WALKTHROUGH_DESIGN_TICK: Duration = Duration::from_millis(700);
/// Walkthrough: pause between the design ticker stopping and the files phase.
pub const WALKTHROUGH_PHASE_PAUSE: Duration = Duration::from_millis(1000);
/// Walkthrough: file ticker period.
pub const WALKTHROUGH_FILE_TICK: Duration = Duration::from_millis(1200);
/// Walkthrough: pause between the file ticker stopping and completion.
pub const WALKTHROUGH_COMPLETE_PAUSE: Duration = Duration::from_millis(2000);

/// Which page's timeline to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Walkthrough,
}

/// Mutations applied together at one offset from driver invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(with = "millis")]
    pub at: Duration,
    pub mutations: Vec<Mutation>,
}

impl Step {
    #[must_use]
    pub fn new(at_ms: u64, mutations: Vec<Mutation>) -> Self {
        Self { at: Duration::from_millis(at_ms), mutations }
    }
}

/// A complete timeline, steps sorted by offset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub variant: Variant,
    pub steps: Vec<Step>,
}

impl Script {
    /// Build a script, ordering steps by offset. Steps sharing an offset keep
    /// their given order.
    #[must_use]
    pub fn new(variant: Variant, mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|s| s.at);
        Self { variant, steps }
    }

    /// Build the script for `variant`.
    #[must_use]
    pub fn for_variant<R: Rng + ?Sized>(variant: Variant, settings: &Settings, rng: &mut R) -> Self {
        match variant {
            Variant::Primary => Self::primary(),
            Variant::Walkthrough => Self::walkthrough(settings, rng),
        }
    }

    /// Offset of the last step, or zero for an empty script.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |s| s.at)
    }

    /// Whether any step fires [`Mutation::Complete`].
    #[must_use]
    pub fn completes(&self) -> bool {
        self.steps.iter().flat_map(|s| &s.mutations).any(|m| matches!(m, Mutation::Complete))
    }

    /// The landing page's ten-step schedule. Progress tops out at 94%.
    #[must_use]
    pub fn primary() -> Self {
        use DesignCategory as C;
        use DesignStatus::{Decided, Thinking};
        use FileStatus::{Complete, Generating, Pending};

        Self::new(
            Variant::Primary,
            vec![
                Step::new(
                    3000,
                    vec![
                        add_design(1, "Color Palette", "Defining primary and secondary colors", C::Color, Thinking),
                        add_design(2, "Typography", "Selecting font families and sizes", C::Typography, Thinking),
                        progress(5),
                    ],
                ),
                Step::new(8000, vec![design_status(1, Decided), progress(12)]),
                Step::new(
                    15000,
                    vec![
                        add_design(3, "Component Library", "Building reusable UI components", C::Component, Thinking),
                        add_design(4, "Spacing System", "Consistent spacing throughout the app", C::Spacing, Thinking),
                        progress(20),
                    ],
                ),
                Step::new(
                    22000,
                    vec![
                        design_status(2, Decided),
                        design_status(4, Decided),
                        add_file(1, "tailwind.config.js", "/config", FileKind::Config, Generating, "Configuration for design tokens"),
                        add_file(2, "Button.tsx", "/components", FileKind::Component, Pending, "Primary button component"),
                        progress(30),
                    ],
                ),
                Step::new(
                    30000,
                    vec![
                        file_status(1, Complete),
                        add_snippet(1, "typescript", "tailwind.config.js", "Design system configuration", TAILWIND_PREVIEW),
                        progress(42),
                    ],
                ),
                Step::new(
                    40000,
                    vec![
                        design_status(3, Decided),
                        add_file(3, "Card.tsx", "/components", FileKind::Component, Pending, "Card component for content display"),
                        add_file(4, "Header.tsx", "/components", FileKind::Component, Generating, "App header with navigation"),
                        progress(55),
                    ],
                ),
                Step::new(
                    50000,
                    vec![
                        file_status(2, Complete),
                        file_status(4, Complete),
                        file_status(3, Generating),
                        add_snippet(2, "tsx", "Button.tsx", "Reusable button component", BUTTON_PREVIEW),
                        progress(68),
                    ],
                ),
                Step::new(
                    65000,
                    vec![
                        file_status(3, Complete),
                        add_file(5, "HomePage.tsx", "/pages", FileKind::Page, Generating, "Main landing page"),
                        add_snippet(3, "tsx", "Card.tsx", "Reusable card component", CARD_PREVIEW),
                        progress(82),
                    ],
                ),
                Step::new(
                    80000,
                    vec![
                        add_file(6, "utils.ts", "/utils", FileKind::Util, Generating, "Utility functions"),
                        progress(88),
                    ],
                ),
                Step::new(95000, vec![file_status(5, Complete), progress(94)]),
            ],
        )
    }

    /// The coming-soon page's streamed walkthrough, ending in completion.
    ///
    /// Timing follows two tickers: a tick appends one item, and the tick
    /// after the last item stops the ticker and arms the next phase.
    #[must_use]
    pub fn walkthrough<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let mut steps = Vec::new();

        let mut at = WALKTHROUGH_DESIGN_DELAY;
        for (idx, label) in (1u32..).zip(DESIGN_LABELS.iter()) {
            at += WALKTHROUGH_DESIGN_TICK;
            steps.push(Step {
                at,
                mutations: vec![Mutation::AddDesign {
                    entry: DesignSystemEntry {
                        id: idx,
                        name: label.name.to_owned(),
                        description: label.description.to_owned(),
                        category: label_category(label.name),
                        status: DesignStatus::Decided,
                    },
                }],
            });
        }
        // Final design tick finds the list full and stops.
        at += WALKTHROUGH_DESIGN_TICK + WALKTHROUGH_PHASE_PAUSE;
        steps.push(Step { at, mutations: vec![Mutation::SetPhase { phase: Phase::Files }] });

        let files = walkthrough_files(&settings.project_name);
        let total = files.len();
        for (idx, (name, kind)) in files.into_iter().enumerate() {
            at += WALKTHROUGH_FILE_TICK;
            let content = pick_snippet(SnippetCategory::for_file(kind), rng).to_owned();
            steps.push(Step {
                at,
                mutations: vec![
                    Mutation::AddFile {
                        entry: FileEntry {
                            id: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                            name,
                            path: kind_dir(kind).to_owned(),
                            kind,
                            status: FileStatus::Complete,
                            description: None,
                            content: Some(content),
                        },
                    },
                    progress(file_progress(idx, total)),
                ],
            });
        }
        at += WALKTHROUGH_FILE_TICK + WALKTHROUGH_COMPLETE_PAUSE;
        steps.push(Step { at, mutations: vec![Mutation::Complete] });

        Self::new(Variant::Walkthrough, steps)
    }
}

/// `round((index + 1) / total * 100)`, capped at 100.
#[must_use]
pub fn file_progress(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = ((index + 1) * 200 + total) / (total * 2);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

fn walkthrough_files(project_name: &str) -> Vec<(String, FileKind)> {
    vec![
        ("tailwind.config.ts".to_owned(), FileKind::Config),
        (format!("{project_name}Button.tsx"), FileKind::Component),
        (format!("{project_name}Card.tsx"), FileKind::Component),
        ("utils.ts".to_owned(), FileKind::Util),
        ("theme.css".to_owned(), FileKind::Style),
        ("Dashboard.tsx".to_owned(), FileKind::Component),
        ("api.ts".to_owned(), FileKind::Util),
    ]
}

fn label_category(name: &str) -> DesignCategory {
    match name {
        "Colors" => DesignCategory::Color,
        "Typography" => DesignCategory::Typography,
        "Spacing" => DesignCategory::Spacing,
        "Breakpoints" => DesignCategory::Layout,
        _ => DesignCategory::Component,
    }
}

fn kind_dir(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Component => "/components",
        FileKind::Util => "/utils",
        FileKind::Config => "/config",
        FileKind::Style => "/styles",
        FileKind::Page => "/pages",
    }
}

fn add_design(id: u32, name: &str, description: &str, category: DesignCategory, status: DesignStatus) -> Mutation {
    Mutation::AddDesign {
        entry: DesignSystemEntry {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            category,
            status,
        },
    }
}

fn design_status(id: u32, status: DesignStatus) -> Mutation {
    Mutation::SetDesignStatus { id, status }
}

fn add_file(id: u32, name: &str, path: &str, kind: FileKind, status: FileStatus, description: &str) -> Mutation {
    Mutation::AddFile {
        entry: FileEntry {
            id,
            name: name.to_owned(),
            path: path.to_owned(),
            kind,
            status,
            description: Some(description.to_owned()),
            content: None,
        },
    }
}

fn file_status(id: u32, status: FileStatus) -> Mutation {
    Mutation::SetFileStatus { id, status }
}

fn add_snippet(id: u32, language: &str, title: &str, description: &str, code: &str) -> Mutation {
    Mutation::AddSnippet {
        snippet: CodeSnippet {
            id,
            language: language.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            code: code.to_owned(),
        },
    }
}

fn progress(percent: u8) -> Mutation {
    Mutation::Progress { percent }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
