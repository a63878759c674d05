//! Patients Screen
//!
//! The inline-editable record grid: state machine and commit protocol
//! in `state`, rendering in `view`.

pub mod state;
pub mod view;

pub use state::{CommitVerb, DeleteTarget, PatientsState};
