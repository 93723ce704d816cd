//! Looping typewriter text.
//!
//! DESIGN
//! ======
//! A pure state machine advanced by a fixed-rate tick: type one character
//! per tick, hold for a number of ticks, delete one character per tick, then
//! move to the next string and start over. The `TypedText` component drives
//! it from an interval timer; tests drive it directly.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    /// Ticks left before deleting starts.
    Holding(u32),
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    strings: Vec<String>,
    index: usize,
    /// Characters of the current string on screen.
    shown: usize,
    mode: Mode,
    hold_ticks: u32,
}

impl Typewriter {
    #[must_use]
    pub fn new(strings: Vec<String>, hold_ticks: u32) -> Self {
        Self { strings, index: 0, shown: 0, mode: Mode::Typing, hold_ticks }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the string currently being typed or deleted.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Visible prefix of the current string.
    #[must_use]
    pub fn text(&self) -> &str {
        let Some(current) = self.strings.get(self.index) else {
            return "";
        };
        match current.char_indices().nth(self.shown) {
            Some((end, _)) => &current[..end],
            None => current,
        }
    }

    pub fn tick(&mut self) {
        let Some(current) = self.strings.get(self.index) else {
            return;
        };
        let len = current.chars().count();
        self.mode = match self.mode {
            Mode::Typing if self.shown < len => {
                self.shown += 1;
                Mode::Typing
            }
            Mode::Typing => Mode::Holding(self.hold_ticks),
            Mode::Holding(0) => Mode::Deleting,
            Mode::Holding(left) => Mode::Holding(left - 1),
            Mode::Deleting if self.shown > 0 => {
                self.shown -= 1;
                Mode::Deleting
            }
            Mode::Deleting => {
                self.index = (self.index + 1) % self.strings.len();
                Mode::Typing
            }
        };
    }
}
