//! MediLabo Desk - Main Library
//!
//! MediLabo Desk is a native desktop client for the MediLabo clinical
//! record service. It lists patients in an inline-editable grid, manages
//! free-text diagnostic notes, and renders the server-computed diabetes
//! risk level for each patient.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types exchanged with the record service
//!   - Patient record and commit payload
//!   - Note records and request bodies
//!   - Risk level enumeration
//!   - Application configuration
//!
//! - **`app`** - The egui/eframe desktop client
//!   - API client with uniform failure handling
//!   - Patients grid with row-level edit modes
//!   - Notes screen with risk display
//!   - Toasts, theme, screen routing
//!
//! # Error Handling
//!
//! Every network outcome resolves to a value: `ApiResult<T>` is either
//! the decoded payload or an [`app::api::ApiFailure`] carrying the
//! service's structured error body. Nothing past the API boundary
//! raises; screens match on the result and report failures through the
//! toast surface.

/// Shared wire types and configuration
pub mod shared;

/// egui native desktop app
pub mod app;
