//! Patients Screen State
//!
//! Owns the store, the row edit-mode table, the per-row drafts, and the
//! commit protocol. Network calls run on worker threads and resolve
//! through mpsc receivers polled once per frame; while anything is in
//! flight the `is_busy` guard keeps mutating controls disabled, so
//! commits for a row are serialized.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver};

use crate::app::api::{ApiClient, ApiResult};
use crate::app::config::Config;
use crate::app::grid::{
    DraftError, EditStopReason, GridField, PatientDraft, PatientStore, RowId, RowModes,
};
use crate::app::toast::ToastQueue;
use crate::shared::{PatientPayload, PatientRecord};

pub type FetchResult = ApiResult<Vec<PatientRecord>>;
pub type CommitResult = ApiResult<PatientRecord>;
pub type DeleteResult = ApiResult<()>;

/// Which verb a row commit dispatches: POST for rows that have never
/// been persisted, PUT for existing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitVerb {
    Create,
    Update,
}

/// A pending patient deletion awaiting the user's confirmation,
/// keyed by the record's natural identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub first_name: String,
    pub last_name: String,
}

pub struct PatientsState {
    pub store: PatientStore,
    pub modes: RowModes,
    pub drafts: HashMap<RowId, PatientDraft>,
    /// True while the collection fetch is outstanding
    pub is_loading: bool,
    /// Delete confirmation dialog state
    pub delete_confirm: Option<DeleteTarget>,

    pending_fetch: Option<Receiver<FetchResult>>,
    pending_commit: Option<(RowId, CommitVerb, Receiver<CommitResult>)>,
    pending_delete: Option<Receiver<DeleteResult>>,
}

impl Default for PatientsState {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientsState {
    pub fn new() -> Self {
        Self {
            store: PatientStore::new(),
            modes: RowModes::new(),
            drafts: HashMap::new(),
            is_loading: false,
            delete_confirm: None,
            pending_fetch: None,
            pending_commit: None,
            pending_delete: None,
        }
    }

    /// Whether any request is outstanding. Mutating controls are
    /// disabled while this holds; there is no cancellation.
    pub fn is_busy(&self) -> bool {
        self.is_loading
            || self.pending_fetch.is_some()
            || self.pending_commit.is_some()
            || self.pending_delete.is_some()
    }

    fn commit_in_flight(&self, id: RowId) -> bool {
        matches!(self.pending_commit, Some((pending, _, _)) if pending == id)
    }

    /// Kick off the full-collection fetch on a worker thread.
    pub fn fetch(&mut self, config: &Config) {
        if self.pending_fetch.is_some() {
            return;
        }
        self.is_loading = true;
        let (tx, rx) = channel();
        let config = config.clone();
        std::thread::spawn(move || {
            let client = ApiClient::new(config);
            let _ = tx.send(client.get::<Vec<PatientRecord>>("/patient/all", &[]));
        });
        self.pending_fetch = Some(rx);
    }

    /// Poll every outstanding receiver. Called once per frame.
    pub fn check_pending(&mut self, config: &Config, toasts: &mut ToastQueue) {
        if let Some(rx) = &self.pending_fetch {
            if let Ok(result) = rx.try_recv() {
                self.pending_fetch = None;
                self.finish_fetch(result, toasts);
            }
        }

        if let Some((id, verb, rx)) = &self.pending_commit {
            if let Ok(result) = rx.try_recv() {
                let (id, verb) = (*id, *verb);
                self.pending_commit = None;
                self.finish_commit(id, verb, result, toasts);
            }
        }

        if let Some(rx) = &self.pending_delete {
            if let Ok(result) = rx.try_recv() {
                self.pending_delete = None;
                if self.finish_delete(result, toasts) {
                    self.fetch(config);
                }
            }
        }
    }

    /// Apply a resolved fetch: replace the store wholesale on success,
    /// report and reset to empty on failure. Edit state is dropped
    /// either way since every row id is replaced.
    pub fn finish_fetch(&mut self, result: FetchResult, toasts: &mut ToastQueue) {
        self.is_loading = false;
        match result {
            Ok(records) => {
                tracing::debug!("fetched {} patients", records.len());
                self.store.replace_all(records);
            }
            Err(failure) => {
                toasts.error(failure.message);
                self.store.clear();
            }
        }
        self.modes.clear();
        self.drafts.clear();
    }

    /// Insert a blank unsaved row at the front of the store, already in
    /// Edit mode with focus indicated on the last-name field.
    pub fn add_row(&mut self) {
        if self.is_busy() {
            return;
        }
        let id = self.store.add_new();
        if let Some(row) = self.store.get(id) {
            self.drafts.insert(id, PatientDraft::from_row(row));
        }
        self.modes.set_edit(id, Some(GridField::LastName));
    }

    /// Put an existing row into Edit mode, snapshotting its current
    /// values into a draft.
    pub fn edit_row(&mut self, id: RowId) {
        if self.is_busy() {
            return;
        }
        if let Some(row) = self.store.get(id) {
            self.drafts.insert(id, PatientDraft::from_row(row));
            self.modes.set_edit(id, None);
        }
    }

    /// A row-level edit-stop event. Only explicit Save and Cancel do
    /// anything; a row merely losing focus is not a commit signal and
    /// is suppressed.
    pub fn stop_edit(
        &mut self,
        id: RowId,
        reason: EditStopReason,
        config: &Config,
        toasts: &mut ToastQueue,
    ) {
        match reason {
            EditStopReason::FocusLost => {}
            EditStopReason::Cancel => self.cancel_row(id),
            EditStopReason::Save => self.save_row(id, config, toasts),
        }
    }

    /// Cancel an edit. Unsaved new rows are discarded entirely; existing
    /// rows keep their pre-edit store value, which the draft never
    /// touched.
    pub fn cancel_row(&mut self, id: RowId) {
        if self.commit_in_flight(id) {
            return;
        }
        self.drafts.remove(&id);
        self.modes.set_view(id);
        let is_new = self.store.get(id).map(|r| r.is_new).unwrap_or(false);
        if is_new {
            self.store.remove(id);
        }
    }

    /// Resolve the verb and wire payload for a row commit, without
    /// dispatching it. `None` when the row has no draft or is missing
    /// its identity fields (Save is disabled in that case).
    pub fn build_commit(
        &self,
        id: RowId,
    ) -> Option<Result<(CommitVerb, PatientPayload), DraftError>> {
        let row = self.store.get(id)?;
        let draft = self.drafts.get(&id)?;
        if !draft.has_identity() {
            return None;
        }
        let verb = if row.is_new {
            CommitVerb::Create
        } else {
            CommitVerb::Update
        };
        Some(draft.to_payload().map(|payload| (verb, payload)))
    }

    /// Dispatch exactly one commit request for the row. On a draft
    /// error (unparseable birth date) the failure is reported and the
    /// row stays in Edit.
    pub fn save_row(&mut self, id: RowId, config: &Config, toasts: &mut ToastQueue) {
        if self.is_busy() {
            return;
        }
        let (verb, payload) = match self.build_commit(id) {
            Some(Ok(pair)) => pair,
            Some(Err(err)) => {
                toasts.error(err.to_string());
                return;
            }
            None => return,
        };

        let (tx, rx) = channel();
        let config = config.clone();
        std::thread::spawn(move || {
            let client = ApiClient::new(config);
            let result = match verb {
                CommitVerb::Create => client.post::<PatientRecord, _>("/patient", &[], &payload),
                CommitVerb::Update => client.put::<PatientRecord, _>("/patient", &[], &payload),
            };
            let _ = tx.send(result);
        });
        self.pending_commit = Some((id, verb, rx));
    }

    /// Apply a resolved commit. Success replaces the row with the
    /// server-acknowledged record and returns it to View; failure is
    /// reported and the row stays in Edit with its draft intact.
    pub fn finish_commit(
        &mut self,
        id: RowId,
        verb: CommitVerb,
        result: CommitResult,
        toasts: &mut ToastQueue,
    ) {
        match result {
            Ok(record) => {
                toasts.success(match verb {
                    CommitVerb::Create => "Patient created successfully",
                    CommitVerb::Update => "Patient updated successfully",
                });
                if let Some(row) = self.store.get_mut(id) {
                    row.apply_record(record);
                }
                self.drafts.remove(&id);
                self.modes.set_view(id);
            }
            Err(failure) => {
                toasts.error(failure.message);
            }
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, first_name: String, last_name: String) {
        if self.is_busy() {
            return;
        }
        self.delete_confirm = Some(DeleteTarget {
            first_name,
            last_name,
        });
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    /// Dispatch the confirmed deletion, keyed by natural identity.
    pub fn confirm_delete(&mut self, config: &Config) {
        let Some(target) = self.delete_confirm.take() else {
            return;
        };
        if self.pending_delete.is_some() {
            return;
        }
        let (tx, rx) = channel();
        let config = config.clone();
        std::thread::spawn(move || {
            let client = ApiClient::new(config);
            let _ = tx.send(client.delete(
                "/patient",
                &[
                    ("firstName", target.first_name.as_str()),
                    ("lastName", target.last_name.as_str()),
                ],
            ));
        });
        self.pending_delete = Some(rx);
    }

    /// Apply a resolved deletion. Returns whether the collection should
    /// be re-fetched (success only).
    pub fn finish_delete(&mut self, result: DeleteResult, toasts: &mut ToastQueue) -> bool {
        match result {
            Ok(()) => {
                toasts.success("Patient deleted successfully");
                true
            }
            Err(failure) => {
                toasts.error(failure.message);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::ApiFailure;
    use crate::app::grid::RowMode;
    use crate::shared::Gender;
    use pretty_assertions::assert_eq;

    fn fetched() -> Vec<PatientRecord> {
        serde_json::from_str(
            r#"[{"firstName":"Ana","lastName":"Lee","birthDate":"1990-01-01","gender":"F","address":null,"phoneNumber":null}]"#,
        )
        .unwrap()
    }

    fn failure(message: &str) -> ApiFailure {
        ApiFailure {
            message: message.to_string(),
            error: None,
            errors: None,
        }
    }

    fn loaded_state() -> PatientsState {
        let mut state = PatientsState::new();
        let mut toasts = ToastQueue::new();
        state.finish_fetch(Ok(fetched()), &mut toasts);
        state
    }

    #[test]
    fn test_scenario_a_fetch_populates_store_in_view_mode() {
        let mut state = PatientsState::new();
        let mut toasts = ToastQueue::new();
        state.is_loading = true;
        state.finish_fetch(Ok(fetched()), &mut toasts);

        assert_eq!(state.store.len(), 1);
        let row = &state.store.rows()[0];
        assert_eq!(row.first_name, "Ana");
        assert_eq!(row.last_name, "Lee");
        assert_eq!(row.address, "");
        assert!(!row.is_new);
        assert_eq!(state.modes.mode_of(row.id), RowMode::View);
        assert!(!state.is_loading);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_fetch_failure_reports_and_empties_store() {
        let mut state = loaded_state();
        let mut toasts = ToastQueue::new();
        state.finish_fetch(Err(failure("Request failed: 502 Bad Gateway")), &mut toasts);

        assert!(state.store.is_empty());
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts.iter().next().unwrap().text,
            "Request failed: 502 Bad Gateway"
        );
    }

    #[test]
    fn test_scenario_b_add_row_prepends_editing_blank_row() {
        let mut state = loaded_state();
        state.add_row();

        let row = &state.store.rows()[0];
        assert!(row.is_new);
        assert_eq!(row.first_name, "");
        assert_eq!(row.gender, Gender::M);
        assert!(state.modes.is_editing(row.id));
        assert_eq!(state.modes.take_focus(row.id), Some(GridField::LastName));
        assert!(state.drafts.contains_key(&row.id));
    }

    #[test]
    fn test_scenario_c_new_row_commits_with_create_verb() {
        let mut state = loaded_state();
        state.add_row();
        let id = state.store.rows()[0].id;
        {
            let draft = state.drafts.get_mut(&id).unwrap();
            draft.first_name = "Ana".into();
            draft.last_name = "Lee".into();
        }

        let (verb, payload) = state.build_commit(id).unwrap().unwrap();
        assert_eq!(verb, CommitVerb::Create);
        assert_eq!(payload.first_name, "Ana");

        let mut toasts = ToastQueue::new();
        let acknowledged: PatientRecord = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Lee","birthDate":null,"gender":"M","address":null,"phoneNumber":null}"#,
        )
        .unwrap();
        state.finish_commit(id, verb, Ok(acknowledged), &mut toasts);

        let row = state.store.get(id).unwrap();
        assert!(!row.is_new);
        assert_eq!(state.modes.mode_of(id), RowMode::View);
        assert_eq!(
            toasts.iter().next().unwrap().text,
            "Patient created successfully"
        );
    }

    #[test]
    fn test_existing_row_commits_with_update_verb() {
        let mut state = loaded_state();
        let id = state.store.rows()[0].id;
        state.edit_row(id);
        let (verb, _) = state.build_commit(id).unwrap().unwrap();
        assert_eq!(verb, CommitVerb::Update);
    }

    #[test]
    fn test_scenario_d_commit_failure_keeps_row_editable_and_store_untouched() {
        let mut state = loaded_state();
        let id = state.store.rows()[0].id;
        state.edit_row(id);
        let before = state.store.get(id).unwrap().clone();
        {
            let draft = state.drafts.get_mut(&id).unwrap();
            draft.first_name = "".into();
        }

        let mut toasts = ToastQueue::new();
        state.finish_commit(
            id,
            CommitVerb::Update,
            Err(ApiFailure {
                message: "Validation failed: firstName: required".to_string(),
                error: None,
                errors: Some(
                    [("firstName".to_string(), "required".to_string())]
                        .into_iter()
                        .collect(),
                ),
            }),
            &mut toasts,
        );

        assert_eq!(
            toasts.iter().next().unwrap().text,
            "Validation failed: firstName: required"
        );
        assert!(state.modes.is_editing(id));
        assert!(state.drafts.contains_key(&id));
        assert_eq!(state.store.get(id).unwrap(), &before);
    }

    #[test]
    fn test_cancel_on_existing_row_is_idempotent_on_store() {
        let mut state = loaded_state();
        let id = state.store.rows()[0].id;
        let before = state.store.get(id).unwrap().clone();

        state.edit_row(id);
        {
            let draft = state.drafts.get_mut(&id).unwrap();
            draft.first_name = "Completely different".into();
            draft.address = "Somewhere else".into();
        }
        state.cancel_row(id);

        assert_eq!(state.store.get(id).unwrap(), &before);
        assert!(!state.store.get(id).unwrap().is_new);
        assert_eq!(state.modes.mode_of(id), RowMode::View);
        assert!(!state.drafts.contains_key(&id));
    }

    #[test]
    fn test_cancel_on_new_row_removes_it_entirely() {
        let mut state = loaded_state();
        state.add_row();
        let id = state.store.rows()[0].id;
        assert_eq!(state.store.len(), 2);

        state.cancel_row(id);
        assert_eq!(state.store.len(), 1);
        assert!(state.store.get(id).is_none());
    }

    #[test]
    fn test_focus_loss_is_not_a_commit_signal() {
        let config = Config::new();
        let mut toasts = ToastQueue::new();
        let mut state = loaded_state();
        let id = state.store.rows()[0].id;
        state.edit_row(id);

        state.stop_edit(id, EditStopReason::FocusLost, &config, &mut toasts);

        assert!(state.modes.is_editing(id));
        assert!(state.drafts.contains_key(&id));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_save_without_identity_is_unavailable() {
        let mut state = loaded_state();
        state.add_row();
        let id = state.store.rows()[0].id;
        // Blank names: no commit can be built.
        assert!(state.build_commit(id).is_none());
    }

    #[test]
    fn test_delete_needs_confirmation_then_refetches_on_success() {
        let mut state = loaded_state();
        state.request_delete("Ana".into(), "Lee".into());
        assert_eq!(
            state.delete_confirm,
            Some(DeleteTarget {
                first_name: "Ana".into(),
                last_name: "Lee".into()
            })
        );

        let mut toasts = ToastQueue::new();
        assert!(state.finish_delete(Ok(()), &mut toasts));
        assert_eq!(
            toasts.iter().next().unwrap().text,
            "Patient deleted successfully"
        );

        assert!(!state.finish_delete(Err(failure("Not found")), &mut toasts));
    }

    #[test]
    fn test_mutations_are_guarded_while_loading() {
        let mut state = loaded_state();
        state.is_loading = true;
        let id = state.store.rows()[0].id;

        state.add_row();
        state.edit_row(id);
        state.request_delete("Ana".into(), "Lee".into());

        assert_eq!(state.store.len(), 1);
        assert!(!state.modes.is_editing(id));
        assert_eq!(state.delete_confirm, None);
    }
}
