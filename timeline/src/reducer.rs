//! Generation state and the reducer that applies timeline mutations.
//!
//! DESIGN
//! ======
//! A step is a list of [`Mutation`]s applied one after another through
//! [`GenerationState::apply`]. Two mutations touching the same list inside a
//! step therefore compose instead of overwriting each other.
//!
//! Status changes only ever move forward; a regressing update is rejected
//! and leaves the entry as it was.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use serde::{Deserialize, Serialize};

use crate::model::{
    CodeSnippet, DesignStatus, DesignSystemEntry, FileEntry, FileStatus, Phase, Stage,
};

/// Error returned by [`GenerationState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    #[error("no design-system entry with id {0}")]
    UnknownDesignEntry(u32),
    #[error("no file entry with id {0}")]
    UnknownFile(u32),
    #[error("design-system entry {id} cannot move from {from:?} to {to:?}")]
    DesignRegression { id: u32, from: DesignStatus, to: DesignStatus },
    #[error("file {id} cannot move from {from:?} to {to:?}")]
    FileRegression { id: u32, from: FileStatus, to: FileStatus },
}

/// One atomic change to [`GenerationState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    AddDesign { entry: DesignSystemEntry },
    SetDesignStatus { id: u32, status: DesignStatus },
    AddFile { entry: FileEntry },
    SetFileStatus { id: u32, status: FileStatus },
    AddSnippet { snippet: CodeSnippet },
    /// Progress never decreases; lower values are ignored.
    Progress { percent: u8 },
    SetPhase { phase: Phase },
    Complete,
}

/// Everything the processing views render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationState {
    pub stage: Stage,
    pub phase: Phase,
    pub progress: u8,
    pub design_system: Vec<DesignSystemEntry>,
    pub files: Vec<FileEntry>,
    pub snippets: Vec<CodeSnippet>,
}

impl GenerationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `processing` with progress reset and every list emptied.
    pub fn begin(&mut self) {
        *self = Self { stage: Stage::Processing, ..Self::default() };
    }

    /// Apply one mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError`] when the mutation names a missing entry or
    /// would move a status backwards. State is unchanged in that case.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), ReduceError> {
        match mutation {
            Mutation::AddDesign { entry } => self.design_system.push(entry.clone()),
            Mutation::SetDesignStatus { id, status } => {
                let entry = self
                    .design_system
                    .iter_mut()
                    .find(|e| e.id == *id)
                    .ok_or(ReduceError::UnknownDesignEntry(*id))?;
                if *status < entry.status {
                    return Err(ReduceError::DesignRegression { id: *id, from: entry.status, to: *status });
                }
                entry.status = *status;
            }
            Mutation::AddFile { entry } => self.files.push(entry.clone()),
            Mutation::SetFileStatus { id, status } => {
                let file = self
                    .files
                    .iter_mut()
                    .find(|f| f.id == *id)
                    .ok_or(ReduceError::UnknownFile(*id))?;
                if *status < file.status {
                    return Err(ReduceError::FileRegression { id: *id, from: file.status, to: *status });
                }
                file.status = *status;
            }
            Mutation::AddSnippet { snippet } => self.snippets.push(snippet.clone()),
            Mutation::Progress { percent } => {
                self.progress = self.progress.max((*percent).min(100));
            }
            Mutation::SetPhase { phase } => self.phase = *phase,
            Mutation::Complete => self.stage = Stage::Complete,
        }
        Ok(())
    }

    #[must_use]
    pub fn design_entry(&self, id: u32) -> Option<&DesignSystemEntry> {
        self.design_system.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn file(&self, id: u32) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.id == id)
    }
}
