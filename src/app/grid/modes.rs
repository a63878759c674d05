//! Row Edit-Mode Table
//!
//! Tracks, per row id, whether that row is presented read-only or with
//! inline editors. This is an explicit keyed table rather than flags on
//! the rows themselves, so the transition rules are testable without
//! any rendering layer.

use std::collections::HashMap;

use super::row::RowId;

/// Grid columns that can receive keyboard focus when a row enters Edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    LastName,
    FirstName,
    BirthDate,
    Gender,
    Address,
    PhoneNumber,
}

/// Presentation mode of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    View,
    Edit,
}

/// Why a row is leaving Edit mode. Only explicit Save and Cancel are
/// commit signals; mere focus loss must never end an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStopReason {
    Save,
    Cancel,
    FocusLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowModeEntry {
    mode: RowMode,
    field_to_focus: Option<GridField>,
}

/// Keyed row-id to mode mapping. Rows without an entry are in `View`.
#[derive(Debug, Default)]
pub struct RowModes {
    entries: HashMap<RowId, RowModeEntry>,
}

impl RowModes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_of(&self, id: RowId) -> RowMode {
        self.entries.get(&id).map(|e| e.mode).unwrap_or_default()
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.mode_of(id) == RowMode::Edit
    }

    pub fn any_editing(&self) -> bool {
        self.entries.values().any(|e| e.mode == RowMode::Edit)
    }

    /// Put a row into Edit mode, optionally marking a field that should
    /// grab focus on the next rendered frame.
    pub fn set_edit(&mut self, id: RowId, field_to_focus: Option<GridField>) {
        self.entries.insert(
            id,
            RowModeEntry {
                mode: RowMode::Edit,
                field_to_focus,
            },
        );
    }

    /// Return a row to View mode. View is the default, so this simply
    /// drops the entry; it also covers rows removed from the store.
    pub fn set_view(&mut self, id: RowId) {
        self.entries.remove(&id);
    }

    /// Consume the pending focus request for a row, if any. The view
    /// calls this once and applies it, so focus is grabbed on a single
    /// frame only.
    pub fn take_focus(&mut self, id: RowId) -> Option<GridField> {
        self.entries.get_mut(&id).and_then(|e| e.field_to_focus.take())
    }

    /// Drop every entry. Used when the store is replaced wholesale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rows_default_to_view() {
        let modes = RowModes::new();
        assert_eq!(modes.mode_of(RowId::fresh()), RowMode::View);
        assert!(!modes.any_editing());
    }

    #[test]
    fn test_set_edit_then_set_view() {
        let mut modes = RowModes::new();
        let id = RowId::fresh();
        modes.set_edit(id, None);
        assert!(modes.is_editing(id));
        assert!(modes.any_editing());
        modes.set_view(id);
        assert_eq!(modes.mode_of(id), RowMode::View);
        assert!(!modes.any_editing());
    }

    #[test]
    fn test_focus_is_consumed_once() {
        let mut modes = RowModes::new();
        let id = RowId::fresh();
        modes.set_edit(id, Some(GridField::LastName));
        assert_eq!(modes.take_focus(id), Some(GridField::LastName));
        assert_eq!(modes.take_focus(id), None);
        // Consuming focus must not end the edit.
        assert!(modes.is_editing(id));
    }

    #[test]
    fn test_entries_are_independent_per_row() {
        let mut modes = RowModes::new();
        let a = RowId::fresh();
        let b = RowId::fresh();
        modes.set_edit(a, None);
        assert!(modes.is_editing(a));
        assert!(!modes.is_editing(b));
        modes.clear();
        assert!(!modes.is_editing(a));
    }
}
