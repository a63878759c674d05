//! Patient Store
//!
//! The in-memory ordered collection backing the grid: this screen's view
//! of the remote patient collection. It is only ever replaced wholesale
//! from a fetch; there is no incremental patching, so local and server
//! state cannot silently diverge.

use crate::shared::PatientRecord;

use super::row::{PatientRow, RowId};

#[derive(Debug, Default)]
pub struct PatientStore {
    rows: Vec<PatientRow>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PatientRow] {
        &self.rows
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn get(&self, id: RowId) -> Option<&PatientRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut PatientRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace every row with projections of the fetched records,
    /// assigning fresh local ids and preserving the server's order.
    pub fn replace_all(&mut self, records: Vec<PatientRecord>) {
        self.rows = records.into_iter().map(PatientRow::from_record).collect();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Prepend a blank unsaved row and return its id.
    pub fn add_new(&mut self) -> RowId {
        let row = PatientRow::blank();
        let id = row.id;
        self.rows.insert(0, row);
        id
    }

    /// Remove a row entirely. Returns whether a row was removed.
    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Gender;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<PatientRecord> {
        serde_json::from_str(
            r#"[
                {"firstName":"Ana","lastName":"Lee","birthDate":"1990-01-01","gender":"F","address":null,"phoneNumber":null},
                {"firstName":"Bo","lastName":"Frey","birthDate":null,"gender":"M","address":"4 Elm Rd","phoneNumber":"555-0101"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_replace_all_preserves_server_order() {
        let mut store = PatientStore::new();
        store.replace_all(records());
        assert_eq!(store.len(), 2);
        assert_eq!(store.rows()[0].first_name, "Ana");
        assert_eq!(store.rows()[1].first_name, "Bo");
        assert!(store.rows().iter().all(|r| !r.is_new));
    }

    #[test]
    fn test_replace_all_assigns_fresh_ids() {
        let mut store = PatientStore::new();
        store.replace_all(records());
        let first_ids = store.row_ids();
        store.replace_all(records());
        assert!(store.row_ids().iter().all(|id| !first_ids.contains(id)));
    }

    #[test]
    fn test_fetched_row_resolves_optionals() {
        let mut store = PatientStore::new();
        store.replace_all(records());
        // Null optionals become empty strings in the row projection.
        assert_eq!(store.rows()[0].address, "");
        assert_eq!(store.rows()[1].address, "4 Elm Rd");
    }

    #[test]
    fn test_add_new_prepends_blank_row() {
        let mut store = PatientStore::new();
        store.replace_all(records());
        let id = store.add_new();
        assert_eq!(store.len(), 3);
        assert_eq!(store.rows()[0].id, id);
        assert!(store.rows()[0].is_new);
        assert_eq!(store.rows()[0].gender, Gender::M);
    }

    #[test]
    fn test_remove() {
        let mut store = PatientStore::new();
        store.replace_all(records());
        let id = store.rows()[0].id;
        assert!(store.remove(id));
        assert_eq!(store.len(), 1);
        assert!(!store.remove(id));
    }
}
