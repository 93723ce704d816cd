//! Random snippet selection for the walkthrough's file previews.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::content::{COMPONENT_SNIPPETS, CONFIG_SNIPPETS, UTIL_SNIPPETS};
use crate::model::FileKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetCategory {
    Component,
    Config,
    Util,
}

impl SnippetCategory {
    /// Pool a file of `kind` draws from. Styles and pages share the config
    /// and component pools respectively.
    #[must_use]
    pub fn for_file(kind: FileKind) -> Self {
        match kind {
            FileKind::Component | FileKind::Page => Self::Component,
            FileKind::Config | FileKind::Style => Self::Config,
            FileKind::Util => Self::Util,
        }
    }

    #[must_use]
    pub fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Component => &COMPONENT_SNIPPETS,
            Self::Config => &CONFIG_SNIPPETS,
            Self::Util => &UTIL_SNIPPETS,
        }
    }
}

/// Pick one snippet uniformly from the category's pool.
#[must_use]
pub fn pick_snippet<R: Rng + ?Sized>(category: SnippetCategory, rng: &mut R) -> &'static str {
    // Pools are non-empty constants.
    category.pool().choose(rng).copied().unwrap_or_default()
}
