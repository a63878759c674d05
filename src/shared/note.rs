//! Diagnostic Note Wire Types
//!
//! Notes carry an opaque server-issued id and two timestamps. The wire
//! format serializes the timestamps as text; they resolve to
//! `DateTime<Utc>` during decoding so the rest of the client only ever
//! sees a temporal type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A diagnostic note as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub id: String,
    pub note: String,
    #[serde(with = "wire_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /notes`: the note text plus the subject patient's
/// natural identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub note: String,
}

/// Body for `PUT /notes?id=`: the replacement note text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateNoteRequest {
    pub note: String,
}

/// Parse a wire timestamp. The service emits RFC 3339, but timestamps
/// written by its document store can come back as naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` without an offset; those are taken as UTC.
pub fn parse_wire_datetime(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        })
}

mod wire_datetime {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_wire_datetime(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decodes_rfc3339_timestamps() {
        let json = r#"{"id":"n1","note":"stable","createdAt":"2024-05-12T10:30:00Z","updatedAt":"2024-05-13T08:00:00+02:00"}"#;
        let record: NoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2024, 5, 12, 10, 30, 0).unwrap()
        );
        assert_eq!(
            record.updated_at,
            Utc.with_ymd_and_hms(2024, 5, 13, 6, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_decodes_naive_timestamps_as_utc() {
        let json = r#"{"id":"n1","note":"stable","createdAt":"2024-05-12T10:30:00.125","updatedAt":"2024-05-12T10:30:00"}"#;
        let record: NoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.updated_at,
            Utc.with_ymd_and_hms(2024, 5, 12, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        let json = r#"{"id":"n1","note":"stable","createdAt":"last tuesday","updatedAt":"2024-05-12T10:30:00"}"#;
        assert!(serde_json::from_str::<NoteRecord>(json).is_err());
    }

    #[test]
    fn test_create_request_shape() {
        let request = CreateNoteRequest {
            first_name: "Ana".into(),
            last_name: "Lee".into(),
            note: "patient reports feeling well".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["lastName"], "Lee");
        assert_eq!(json["note"], "patient reports feeling well");
    }
}
