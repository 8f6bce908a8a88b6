//! Networking modules for the document backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `config` resolves where they go, and `types`
//! defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
