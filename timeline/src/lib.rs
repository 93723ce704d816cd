//! Scripted generation timeline for the Product Builder demo page.
//!
//! This crate is UI-framework agnostic: it owns the settings record, the
//! generated lists, the reducer that mutates them, the two timeline scripts,
//! and the driver that plays a script against virtual or real time. The
//! `client` crate renders the state; the `cli` crate replays it in a
//! terminal.
//!
//! ARCHITECTURE
//! ============
//! `form` validates a draft into [`Settings`] -> `script` builds ordered
//! `(offset, mutations)` steps -> `driver` applies due steps through the
//! `reducer` -> `display` maps list entries to badges for rendering.
//! `schedule` arms cancellable timers that call back into the driver.

pub mod content;
pub mod display;
pub mod driver;
pub mod form;
pub mod model;
pub mod picker;
pub mod reducer;
pub mod schedule;
pub mod script;

pub use driver::{Advance, Driver, DriverState};
pub use form::{FormErrors, SettingsDraft, validate_email};
pub use model::{
    CodeSnippet, DesignCategory, DesignStatus, DesignSystemEntry, Feature, FileEntry, FileKind, FileStatus, Phase,
    ProjectType, Settings, Stage, Theme,
};
pub use reducer::{GenerationState, Mutation, ReduceError};
pub use schedule::{Clock, ManualScheduler, MonotonicClock, Playback, Scheduler, TaskHandle};
pub use script::{Script, Step, Variant};
