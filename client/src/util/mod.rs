//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, routing policy) from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod storage;
