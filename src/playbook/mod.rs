//! Core logic for the saved-content playbook.

pub mod entry;
pub mod insights;
pub mod store;
