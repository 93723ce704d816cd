//! Timeline driver: plays a [`Script`] against a [`GenerationState`].
//!
//! DESIGN
//! ======
//! The driver never reads a clock. Callers hand it the elapsed time since
//! invocation and it applies every step due by then, in order, exactly once.
//! Real timers, virtual test time, and terminal replay all reduce to calls
//! of [`Driver::advance_to`].
//!
//! States: `Idle -> Running -> {Finished | Cancelled}`. `Finished` only
//! means the script is exhausted; whether the page reached
//! [`Stage::Complete`] depends on the script.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Stage;
use crate::reducer::GenerationState;
use crate::script::Script;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverState {
    #[default]
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Outcome of one [`Driver::advance_to`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Advance {
    /// Steps applied by this call.
    pub applied: usize,
    /// True only on the call that moved the stage to `complete`.
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct Driver {
    script: Script,
    cursor: usize,
    state: DriverState,
}

impl Driver {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self { script, cursor: 0, state: DriverState::Idle }
    }

    #[must_use]
    pub fn script(&self) -> &Script {
        &self.script
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Steps applied so far. Indexes into [`Script::steps`].
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Invoke the driver: `input -> processing`, progress reset.
    ///
    /// A second call is ignored so a double submit cannot restart the run.
    pub fn start(&mut self, generation: &mut GenerationState) {
        if self.state != DriverState::Idle {
            tracing::debug!(state = ?self.state, "driver already started");
            return;
        }
        generation.begin();
        self.state = if self.script.steps.is_empty() { DriverState::Finished } else { DriverState::Running };
        tracing::debug!(variant = ?self.script.variant, steps = self.script.steps.len(), "timeline started");
    }

    /// Apply every step with offset `<= elapsed` not yet applied.
    pub fn advance_to(&mut self, generation: &mut GenerationState, elapsed: Duration) -> Advance {
        let mut advance = Advance::default();
        if self.state != DriverState::Running {
            return advance;
        }

        while let Some(step) = self.script.steps.get(self.cursor) {
            if step.at > elapsed {
                break;
            }
            let was_complete = generation.stage == Stage::Complete;
            for mutation in &step.mutations {
                if let Err(e) = generation.apply(mutation) {
                    tracing::warn!(at_ms = step.at.as_millis(), error = %e, "timeline mutation rejected");
                }
            }
            advance.applied += 1;
            advance.completed |= !was_complete && generation.stage == Stage::Complete;
            tracing::debug!(
                at_ms = step.at.as_millis(),
                progress = generation.progress,
                "timeline step applied"
            );
            self.cursor += 1;
        }

        if self.cursor >= self.script.steps.len() {
            self.state = DriverState::Finished;
        }
        advance
    }

    /// Offset of the next step still to run.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        if self.state != DriverState::Running {
            return None;
        }
        self.script.steps.get(self.cursor).map(|s| s.at)
    }

    /// Stop the run. Later `advance_to` calls do nothing.
    pub fn cancel(&mut self) {
        if matches!(self.state, DriverState::Idle | DriverState::Running) {
            tracing::debug!(applied = self.cursor, "timeline cancelled");
            self.state = DriverState::Cancelled;
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.script.steps.len()
    }

    /// Distinct offsets at which steps fire, for arming timers.
    #[must_use]
    pub fn offsets(&self) -> Vec<Duration> {
        let mut out = self.script.steps.iter().map(|s| s.at).collect::<Vec<_>>();
        out.dedup();
        out
    }
}
