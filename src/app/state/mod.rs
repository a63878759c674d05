//! Central Application State
//!
//! Screen routing plus the per-frame polling that resolves worker
//! results back onto the UI thread.

use crate::app::config::Config;
use crate::app::notes::NotesState;
use crate::app::patients::PatientsState;
use crate::app::toast::ToastQueue;

/// Current screen, the moral equivalent of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Patients,
    Notes,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub screen: Screen,
    pub toasts: ToastQueue,
    pub patients: PatientsState,
    pub notes: NotesState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            screen: Screen::Home,
            toasts: ToastQueue::new(),
            patients: PatientsState::new(),
            notes: NotesState::new(),
        }
    }

    /// Poll every outstanding worker result and prune expired toasts.
    /// Called once per frame before rendering.
    pub fn check_pending(&mut self) {
        let config = self.config.clone();
        self.patients.check_pending(&config, &mut self.toasts);
        self.notes.check_pending(&config, &mut self.toasts);
        self.toasts.retain_fresh();
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    /// Navigate to the grid. Entering the screen always re-fetches, so
    /// it reflects the authoritative collection.
    pub fn go_patients(&mut self) {
        self.screen = Screen::Patients;
        let config = self.config.clone();
        self.patients.fetch(&config);
    }

    /// Open the notes screen for one patient, by natural identity.
    pub fn open_notes(&mut self, first_name: String, last_name: String) {
        let config = self.config.clone();
        self.notes.open(first_name, last_name, &config);
        self.screen = Screen::Notes;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
