//! Client application state modules.
//!
//! DESIGN
//! ======
//! State is plain data wrapped in `RwSignal` by pages. Timeline lists use
//! `timeline::GenerationState` directly; only visitor input lives here.

pub mod session;
