//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (submit delay, playback
//! lifetime) and delegates rendering details to `components`.

pub mod coming_soon;
pub mod home;
