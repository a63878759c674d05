//! Notes Screen
//!
//! Diagnostic notes and the risk chip for one patient.

pub mod state;
pub mod view;

pub use state::{NoteAction, NoteSubject, NotesState};
