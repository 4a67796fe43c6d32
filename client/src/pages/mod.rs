//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and delegates rendering details to
//! `components`.

pub mod login;
pub mod planner;
pub mod settings;
