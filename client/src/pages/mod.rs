//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs its route guard and delegates rendering details to
//! `components`.

pub mod login;
pub mod not_found;
pub mod workspace;
