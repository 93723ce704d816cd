//! Display lookups for list entries: icon, tone, label, spinner.
//!
//! UI-framework agnostic so the Leptos components and the CLI replay render
//! the same badges. Every function is a pure table lookup.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use serde::Serialize;

use crate::model::{DesignCategory, DesignStatus, DesignSystemEntry, FileEntry, FileKind, FileStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IconDisplay {
    /// Icon glyph name, rendered by the client's icon component.
    pub icon: &'static str,
    /// CSS tone modifier (`primary`, `blue`, ...).
    pub tone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub tone: &'static str,
    pub spinner: bool,
}

#[must_use]
pub fn design_icon(category: DesignCategory) -> IconDisplay {
    match category {
        DesignCategory::Color => IconDisplay { icon: "circle", tone: "primary" },
        DesignCategory::Typography => IconDisplay { icon: "type", tone: "secondary" },
        DesignCategory::Component => IconDisplay { icon: "grid", tone: "green" },
        DesignCategory::Layout | DesignCategory::Spacing => IconDisplay { icon: "ruler", tone: "yellow" },
    }
}

#[must_use]
pub fn design_status(status: DesignStatus) -> StatusDisplay {
    match status {
        DesignStatus::Thinking => StatusDisplay { label: "Thinking", tone: "grey", spinner: true },
        DesignStatus::Decided => StatusDisplay { label: "Decided", tone: "green", spinner: false },
    }
}

#[must_use]
pub fn file_icon(kind: FileKind) -> IconDisplay {
    match kind {
        FileKind::Component => IconDisplay { icon: "code", tone: "blue" },
        FileKind::Util => IconDisplay { icon: "file-text", tone: "yellow" },
        FileKind::Config => IconDisplay { icon: "settings", tone: "purple" },
        FileKind::Page => IconDisplay { icon: "layout", tone: "green" },
        FileKind::Style => IconDisplay { icon: "file", tone: "grey" },
    }
}

#[must_use]
pub fn file_status(status: FileStatus) -> StatusDisplay {
    match status {
        FileStatus::Pending => StatusDisplay { label: "Pending", tone: "grey", spinner: false },
        FileStatus::Generating => StatusDisplay { label: "Generating", tone: "yellow", spinner: true },
        FileStatus::Complete => StatusDisplay { label: "Complete", tone: "green", spinner: false },
    }
}

/// Colour dot next to a file name in the walkthrough list.
#[must_use]
pub fn file_dot(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Component => "blue",
        FileKind::Config => "yellow",
        FileKind::Style => "pink",
        FileKind::Util => "green",
        FileKind::Page => "grey",
    }
}

/// Everything a design-system row shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DesignRow {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: IconDisplay,
    pub status: StatusDisplay,
    /// Row modifier class: `pending` while thinking, `settled` after.
    pub state_class: &'static str,
}

/// Everything a file row shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub description: Option<String>,
    pub icon: IconDisplay,
    pub status: StatusDisplay,
    pub state_class: &'static str,
}

#[must_use]
pub fn design_row(entry: &DesignSystemEntry) -> DesignRow {
    DesignRow {
        id: entry.id,
        name: entry.name.clone(),
        description: entry.description.clone(),
        icon: design_icon(entry.category),
        status: design_status(entry.status),
        state_class: match entry.status {
            DesignStatus::Thinking => "pending",
            DesignStatus::Decided => "settled",
        },
    }
}

#[must_use]
pub fn file_row(entry: &FileEntry) -> FileRow {
    FileRow {
        id: entry.id,
        name: entry.name.clone(),
        path: entry.path.clone(),
        description: entry.description.clone(),
        icon: file_icon(entry.kind),
        status: file_status(entry.status),
        state_class: match entry.status {
            FileStatus::Pending => "pending",
            FileStatus::Generating => "active",
            FileStatus::Complete => "done",
        },
    }
}

#[must_use]
pub fn design_rows(entries: &[DesignSystemEntry]) -> Vec<DesignRow> {
    entries.iter().map(design_row).collect()
}

#[must_use]
pub fn file_rows(entries: &[FileEntry]) -> Vec<FileRow> {
    entries.iter().map(file_row).collect()
}

/// Tag text for a settings chip: the first hyphen becomes a space.
#[must_use]
pub fn chip_label(tag: &str) -> String {
    tag.replacen('-', " ", 1)
}
