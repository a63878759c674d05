//! Patient Row
//!
//! The client-side projection of a patient record: wire fields plus a
//! local synthetic identifier and the `is_new` marker for rows that
//! exist only in the grid and have never been persisted.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::patient::{format_wire_date, parse_wire_date};
use crate::shared::{Gender, PatientPayload, PatientRecord};

/// Local-only row identifier. Stable for the lifetime of the grid,
/// never sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One grid row. Optional wire fields resolve to empty strings here so
/// the view layer never deals with `Option<String>` buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRow {
    pub id: RowId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    pub address: String,
    pub phone_number: String,
    pub is_new: bool,
}

impl PatientRow {
    /// Project a fetched record into a row with a fresh local id.
    pub fn from_record(record: PatientRecord) -> Self {
        Self {
            id: RowId::fresh(),
            first_name: record.first_name,
            last_name: record.last_name,
            birth_date: record.birth_date,
            gender: record.gender,
            address: record.address.unwrap_or_default(),
            phone_number: record.phone_number.unwrap_or_default(),
            is_new: false,
        }
    }

    /// A blank unsaved row, as produced by the "add patient" action.
    pub fn blank() -> Self {
        Self {
            id: RowId::fresh(),
            first_name: String::new(),
            last_name: String::new(),
            birth_date: None,
            gender: Gender::default(),
            address: String::new(),
            phone_number: String::new(),
            is_new: true,
        }
    }

    /// Replace this row's data with the server-acknowledged record,
    /// keeping the local id, and clear the unsaved marker.
    pub fn apply_record(&mut self, record: PatientRecord) {
        self.first_name = record.first_name;
        self.last_name = record.last_name;
        self.birth_date = record.birth_date;
        self.gender = record.gender;
        self.address = record.address.unwrap_or_default();
        self.phone_number = record.phone_number.unwrap_or_default();
        self.is_new = false;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Invalid birth date '{0}', expected YYYY-MM-DD")]
    BirthDate(String),
}

/// In-progress edits for a row in Edit mode. Pure text buffers; nothing
/// here touches the store until Save commits, so Cancel can drop the
/// draft and leave the store value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    /// Birth date text buffer, parsed at commit time
    pub birth_date: String,
    pub gender: Gender,
    pub address: String,
    pub phone_number: String,
}

impl PatientDraft {
    pub fn from_row(row: &PatientRow) -> Self {
        Self {
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            birth_date: row.birth_date.map(format_wire_date).unwrap_or_default(),
            gender: row.gender,
            address: row.address.clone(),
            phone_number: row.phone_number.clone(),
        }
    }

    /// Whether the row carries the identity fields a commit requires.
    /// Save stays disabled until this holds.
    pub fn has_identity(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    /// Build the commit payload. Required fields are always carried
    /// (birth date as null when the buffer is blank); optional fields
    /// are trimmed and omitted entirely when blank.
    pub fn to_payload(&self) -> Result<PatientPayload, DraftError> {
        let raw_date = self.birth_date.trim();
        let birth_date = if raw_date.is_empty() {
            None
        } else {
            Some(
                parse_wire_date(raw_date)
                    .map_err(|_| DraftError::BirthDate(raw_date.to_string()))?,
            )
        };
        Ok(PatientPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date,
            gender: self.gender,
            address: non_blank(&self.address),
            phone_number: non_blank(&self.phone_number),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
