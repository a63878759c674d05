//! Shared Module
//!
//! Wire types exchanged with the MediLabo record service. Everything in
//! here is plain serde data designed for JSON transmission over HTTP;
//! nothing depends on the UI layer.

/// Patient wire record and commit payload
pub mod patient;

/// Diagnostic note wire types
pub mod note;

/// Server-computed risk level
pub mod risk;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use note::{CreateNoteRequest, NoteRecord, UpdateNoteRequest};
pub use patient::{Gender, PatientPayload, PatientRecord};
pub use risk::RiskLevel;
