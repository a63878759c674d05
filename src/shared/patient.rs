//! Patient Wire Types
//!
//! The patient record as the service serializes it, plus the payload
//! shape sent back on create/update. The record's natural key is the
//! (firstName, lastName) pair; the service issues no client-visible id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient gender, a fixed two-value domain on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    M,
    F,
}

impl Gender {
    /// All values, in the order the service enumerates them.
    pub const ALL: [Gender; 2] = [Gender::M, Gender::F];

    pub fn label(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A patient record as returned by the service.
///
/// `birth_date` is optional on the wire: absent/null is a valid state,
/// distinct from an unparseable value (which fails decoding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "wire_date")]
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The commit payload for `POST /patient` and `PUT /patient`.
///
/// Required fields are always present (`birthDate` serializes as null
/// when absent). Optional fields are omitted entirely when blank so the
/// service applies its own defaulting, never sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "wire_date")]
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Parse a date off the wire. The service writes plain `YYYY-MM-DD`,
/// but full RFC 3339 timestamps show up as well; both resolve to the
/// calendar date.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
}

/// Canonical serialized form: `YYYY-MM-DD`.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

mod wire_date {
    use chrono::NaiveDate;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&super::format_wire_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => super::parse_wire_date(&raw).map(Some).map_err(D::Error::custom),
        }
    }
}
