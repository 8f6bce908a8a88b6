//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the workspace state signals provided by the
//! workspace page through Leptos context.

pub mod file_picker;
pub mod folder_picker;
pub mod history_list;
pub mod left_sidebar;
pub mod main_content;
pub mod user_card;
