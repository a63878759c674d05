//! egui Native Desktop App Module
//!
//! The MediLabo desktop client. One central [`state::AppState`] is
//! shared across immediate-mode views; network calls run on worker
//! threads and resolve through channels polled once per frame.
//!
//! # Architecture
//!
//! - **`config`** - Service base URL and static credentials
//! - **`api`** - The request wrapper every screen goes through
//! - **`grid`** - Row model, edit-mode table, patient store
//! - **`patients`** - Inline-editable grid screen
//! - **`notes`** - Notes and risk screen
//! - **`state`** - Screen routing and per-frame polling
//! - **`views`** - Top bar, home screen, panel dispatch, toasts
//! - **`toast`** - Transient notification queue
//! - **`format`** - Relative date humanization
//! - **`theme`** - Colors and the risk severity mapping

pub mod api;
pub mod config;
pub mod format;
pub mod grid;
pub mod notes;
pub mod patients;
pub mod state;
pub mod theme;
pub mod toast;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ApiFailure, ApiResult};
pub use config::Config;
pub use state::{AppState, Screen};
pub use toast::{Toast, ToastKind, ToastQueue};
