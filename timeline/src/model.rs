//! Settings record and the three generated lists shown by the page.
//!
//! DESIGN
//! ======
//! Every enum carries a stable kebab-case tag (the serde form) and a display
//! label, so views and the CLI agree on naming without string literals
//! scattered through components.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// SETTINGS
// =============================================================================

/// Kind of project the visitor asks the generator to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebApp,
    #[default]
    Dashboard,
    Ecommerce,
    Blog,
    Portfolio,
}

impl ProjectType {
    pub const ALL: [Self; 5] = [Self::WebApp, Self::Dashboard, Self::Ecommerce, Self::Blog, Self::Portfolio];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::WebApp => "web-app",
            Self::Dashboard => "dashboard",
            Self::Ecommerce => "ecommerce",
            Self::Blog => "blog",
            Self::Portfolio => "portfolio",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WebApp => "Web Application",
            Self::Dashboard => "Dashboard",
            Self::Ecommerce => "E-commerce",
            Self::Blog => "Blog",
            Self::Portfolio => "Portfolio",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

/// Optional capability toggled on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Auth,
    Api,
    DarkMode,
    Responsive,
    Animations,
    Forms,
}

impl Feature {
    pub const ALL: [Self; 6] = [Self::Auth, Self::Api, Self::DarkMode, Self::Responsive, Self::Animations, Self::Forms];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Api => "api",
            Self::DarkMode => "dark-mode",
            Self::Responsive => "responsive",
            Self::Animations => "animations",
            Self::Forms => "forms",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auth => "Authentication",
            Self::Api => "API Integration",
            Self::DarkMode => "Dark Mode",
            Self::Responsive => "Responsive Design",
            Self::Animations => "Animations",
            Self::Forms => "Form Handling",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.tag() == tag)
    }
}

/// Visual theme preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Modern,
    Minimal,
    Colorful,
    Corporate,
    Playful,
}

impl Theme {
    pub const ALL: [Self; 5] = [Self::Modern, Self::Minimal, Self::Colorful, Self::Corporate, Self::Playful];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::Colorful => "colorful",
            Self::Corporate => "corporate",
            Self::Playful => "playful",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
            Self::Colorful => "Colorful",
            Self::Corporate => "Corporate",
            Self::Playful => "Playful",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

/// Validated form submission. Only `email` may change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub project_name: String,
    pub project_type: ProjectType,
    /// Selection order is preserved; duplicates never occur.
    pub features: Vec<Feature>,
    pub theme: Theme,
    pub email: Option<String>,
}

// =============================================================================
// GENERATED LISTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignCategory {
    Color,
    Typography,
    Component,
    Layout,
    Spacing,
}

/// Lifecycle of a design-system token. Ordered: `Thinking < Decided`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Thinking,
    Decided,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystemEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: DesignCategory,
    pub status: DesignStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Util,
    Config,
    Style,
    Page,
}

impl FileKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Util => "util",
            Self::Config => "config",
            Self::Style => "style",
            Self::Page => "page",
        }
    }
}

/// Lifecycle of a generated file. Ordered: `Pending < Generating < Complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Pending,
    Generating,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub kind: FileKind,
    pub status: FileStatus,
    pub description: Option<String>,
    /// Code shown under the file in the walkthrough view.
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub id: u32,
    pub language: String,
    pub title: String,
    pub description: String,
    pub code: String,
}

// =============================================================================
// STAGE
// =============================================================================

/// Top-level page stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Input,
    Processing,
    Complete,
}

/// Sub-step of the walkthrough variant while processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Design,
    Files,
}
