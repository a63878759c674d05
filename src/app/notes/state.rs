//! Notes Screen State
//!
//! Diagnostic notes for one patient, plus the server-computed risk
//! level. Same worker-thread/receiver pattern as the patients screen:
//! every mutation concludes with a full list+risk re-fetch rather than
//! a local patch.

use std::sync::mpsc::{channel, Receiver};

use crate::app::api::{ApiClient, ApiResult};
use crate::app::config::Config;
use crate::app::toast::ToastQueue;
use crate::shared::{CreateNoteRequest, NoteRecord, RiskLevel, UpdateNoteRequest};

/// The patient whose notes are on screen, by natural identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSubject {
    pub first_name: String,
    pub last_name: String,
}

/// One fetch pass resolves the note list and, when that succeeds, the
/// risk level. `risk` stays `None` when the list fetch failed and the
/// risk call was never made.
#[derive(Debug)]
pub struct FetchOutcome {
    pub notes: ApiResult<Vec<NoteRecord>>,
    pub risk: Option<ApiResult<RiskLevel>>,
}

/// Which note mutation is in flight, for the outcome toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteAction {
    Create,
    Update,
    Delete,
}

impl NoteAction {
    fn success_text(self) -> &'static str {
        match self {
            NoteAction::Create => "Note created",
            NoteAction::Update => "Note updated",
            NoteAction::Delete => "Note deleted",
        }
    }
}

pub struct NotesState {
    pub subject: Option<NoteSubject>,
    pub notes: Vec<NoteRecord>,
    pub risk: RiskLevel,
    pub is_loading: bool,

    /// Create dialog
    pub create_open: bool,
    pub create_content: String,
    /// Edit dialog: target note id plus its current text
    pub edit_target: Option<(String, String)>,
    pub edit_content: String,
    /// Delete confirmation: target note id
    pub delete_target: Option<String>,

    pending_fetch: Option<Receiver<FetchOutcome>>,
    pending_mutation: Option<(NoteAction, Receiver<ApiResult<()>>)>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesState {
    pub fn new() -> Self {
        Self {
            subject: None,
            notes: Vec::new(),
            risk: RiskLevel::None,
            is_loading: false,
            create_open: false,
            create_content: String::new(),
            edit_target: None,
            edit_content: String::new(),
            delete_target: None,
            pending_fetch: None,
            pending_mutation: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.pending_fetch.is_some() || self.pending_mutation.is_some()
    }

    /// Switch to a patient's notes, dropping whatever was on screen,
    /// and start the first fetch.
    pub fn open(&mut self, first_name: String, last_name: String, config: &Config) {
        *self = Self::new();
        self.subject = Some(NoteSubject {
            first_name,
            last_name,
        });
        self.fetch(config);
    }

    /// Fetch the note list, then the risk level, in one worker pass.
    pub fn fetch(&mut self, config: &Config) {
        let Some(subject) = self.subject.clone() else {
            return;
        };
        if self.pending_fetch.is_some() {
            return;
        }
        self.is_loading = true;
        let (tx, rx) = channel();
        let config = config.clone();
        std::thread::spawn(move || {
            let client = ApiClient::new(config);
            let query = [
                ("firstName", subject.first_name.as_str()),
                ("lastName", subject.last_name.as_str()),
            ];
            let notes = client.get::<Vec<NoteRecord>>("/notes", &query);
            let risk = notes
                .is_ok()
                .then(|| client.get::<RiskLevel>("/risk", &query));
            let _ = tx.send(FetchOutcome { notes, risk });
        });
        self.pending_fetch = Some(rx);
    }

    pub fn check_pending(&mut self, config: &Config, toasts: &mut ToastQueue) {
        if let Some(rx) = &self.pending_fetch {
            if let Ok(outcome) = rx.try_recv() {
                self.pending_fetch = None;
                self.finish_fetch(outcome, toasts);
            }
        }

        if let Some((action, rx)) = &self.pending_mutation {
            if let Ok(result) = rx.try_recv() {
                let action = *action;
                self.pending_mutation = None;
                if self.finish_mutation(action, result, toasts) {
                    self.fetch(config);
                }
            }
        }
    }

    /// Apply a resolved fetch. A failed list fetch reports and clears
    /// the list; a failed risk fetch reports and resets the level to
    /// the lowest severity.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome, toasts: &mut ToastQueue) {
        self.is_loading = false;
        match outcome.notes {
            Ok(notes) => {
                tracing::debug!("fetched {} notes", notes.len());
                self.notes = notes;
            }
            Err(failure) => {
                toasts.error(failure.message);
                self.notes.clear();
                return;
            }
        }
        match outcome.risk {
            Some(Ok(level)) => self.risk = level,
            Some(Err(failure)) => {
                toasts.error(failure.message);
                self.risk = RiskLevel::None;
            }
            None => {}
        }
    }

    /// Apply a resolved mutation. Returns whether the list+risk pair
    /// should be re-fetched (success only).
    pub fn finish_mutation(
        &mut self,
        action: NoteAction,
        result: ApiResult<()>,
        toasts: &mut ToastQueue,
    ) -> bool {
        match result {
            Ok(()) => {
                toasts.success(action.success_text());
                true
            }
            Err(failure) => {
                toasts.error(failure.message);
                false
            }
        }
    }

    pub fn open_create(&mut self) {
        if self.is_busy() {
            return;
        }
        self.create_open = true;
        self.create_content.clear();
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
        self.create_content.clear();
    }

    pub fn can_submit_create(&self) -> bool {
        !self.create_content.trim().is_empty() && !self.is_busy()
    }

    /// Dispatch the create call and close the dialog.
    pub fn submit_create(&mut self, config: &Config) {
        let Some(subject) = self.subject.clone() else {
            return;
        };
        let content = self.create_content.trim().to_string();
        self.close_create();
        if content.is_empty() {
            return;
        }
        let request = CreateNoteRequest {
            first_name: subject.first_name,
            last_name: subject.last_name,
            note: content,
        };
        self.dispatch(NoteAction::Create, config, move |client| {
            client
                .post::<NoteRecord, _>("/notes", &[], &request)
                .map(|_| ())
        });
    }

    pub fn open_edit(&mut self, note: &NoteRecord) {
        if self.is_busy() {
            return;
        }
        self.edit_target = Some((note.id.clone(), note.note.clone()));
        self.edit_content = note.note.clone();
    }

    pub fn close_edit(&mut self) {
        self.edit_target = None;
        self.edit_content.clear();
    }

    /// Save is only offered for a non-blank text that actually changed.
    pub fn can_submit_edit(&self) -> bool {
        let trimmed = self.edit_content.trim();
        match &self.edit_target {
            Some((_, current)) => {
                !trimmed.is_empty() && trimmed != current.trim() && !self.is_busy()
            }
            None => false,
        }
    }

    /// Dispatch the update call and close the dialog.
    pub fn submit_edit(&mut self, config: &Config) {
        let Some((id, _)) = self.edit_target.take() else {
            return;
        };
        let content = self.edit_content.trim().to_string();
        self.edit_content.clear();
        if content.is_empty() {
            return;
        }
        let request = UpdateNoteRequest { note: content };
        self.dispatch(NoteAction::Update, config, move |client| {
            client
                .put::<NoteRecord, _>("/notes", &[("id", id.as_str())], &request)
                .map(|_| ())
        });
    }

    pub fn request_delete(&mut self, note_id: String) {
        if self.is_busy() {
            return;
        }
        self.delete_target = Some(note_id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Dispatch the confirmed deletion.
    pub fn confirm_delete(&mut self, config: &Config) {
        let Some(id) = self.delete_target.take() else {
            return;
        };
        self.dispatch(NoteAction::Delete, config, move |client| {
            client.delete("/notes", &[("id", id.as_str())])
        });
    }

    fn dispatch(
        &mut self,
        action: NoteAction,
        config: &Config,
        call: impl FnOnce(&ApiClient) -> ApiResult<()> + Send + 'static,
    ) {
        if self.pending_mutation.is_some() {
            return;
        }
        let (tx, rx) = channel();
        let config = config.clone();
        std::thread::spawn(move || {
            let client = ApiClient::new(config);
            let _ = tx.send(call(&client));
        });
        self.pending_mutation = Some((action, rx));
    }
}
