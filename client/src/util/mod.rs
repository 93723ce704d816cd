//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clipboard;
pub mod highlight;
pub mod pointer_glow;
pub mod run;
pub mod scheduler;
pub mod typewriter;
