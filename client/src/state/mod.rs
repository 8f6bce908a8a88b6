//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `documents`, `selection`, `history`)
//! so each component depends on a small focused model. None of these types
//! touch the DOM; they are wrapped in signals by the app shell.

pub mod documents;
pub mod history;
pub mod selection;
pub mod session;
