//! Inline-Editable Grid Primitives
//!
//! The row model, the keyed edit-mode table, and the ordered store the
//! patients screen is built on. None of this touches the network or the
//! rendering layer.

pub mod modes;
pub mod row;
pub mod store;

pub use modes::{EditStopReason, GridField, RowMode, RowModes};
pub use row::{DraftError, PatientDraft, PatientRow, RowId};
pub use store::PatientStore;
