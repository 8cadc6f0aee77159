// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::profile::models::{FieldKind, FieldName, FieldValue, ProfileRecord, Visibility};

/// On-disk form of a record: `[{"name": "First Name", "value": "…"}, …]`.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    name: String,
    value: SnapshotValue,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum SnapshotValue {
    Text(String),
    List(Vec<String>),
}

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot is not a list of profile fields: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Snapshot contains unknown field '{name}'")]
    UnknownField { name: String },

    #[error("Snapshot field '{field}' has a value of the wrong type")]
    WrongType { field: FieldName },

    #[error("Snapshot contains field '{field}' more than once")]
    DuplicateField { field: FieldName },
}

pub fn encode_snapshot(record: &ProfileRecord) -> Result<String, SnapshotError> {
    let entries = record
        .entries()
        .into_iter()
        .map(|(field, value)| SnapshotEntry {
            name: field.to_string(),
            value: match value {
                FieldValue::Text(value) | FieldValue::Choice(value) => SnapshotValue::Text(value),
                FieldValue::List(values) => SnapshotValue::List(values),
            },
        })
        .collect::<Vec<_>>();

    Ok(serde_json::to_string(&entries)?)
}

/// Decodes a snapshot. Fields missing from the snapshot keep their default values, a stored
/// visibility other than `Public` or `Private` reads as `Private`.
pub fn decode_snapshot(json: &str) -> Result<ProfileRecord, SnapshotError> {
    let entries = serde_json::from_str::<Vec<SnapshotEntry>>(json)?;

    let mut record = ProfileRecord::default();
    let mut seen_fields = HashSet::new();

    for entry in entries {
        let field = FieldName::from_str(&entry.name)
            .map_err(|_| SnapshotError::UnknownField { name: entry.name })?;

        if !seen_fields.insert(field) {
            return Err(SnapshotError::DuplicateField { field });
        }

        let value = match (field.kind(), entry.value) {
            (FieldKind::Text, SnapshotValue::Text(value)) => FieldValue::Text(value),
            (FieldKind::List, SnapshotValue::List(values)) => FieldValue::List(values),
            (FieldKind::Choice, SnapshotValue::Text(value)) => {
                FieldValue::Choice(Visibility::parse_or_default(&value).to_string())
            }
            _ => return Err(SnapshotError::WrongType { field }),
        };

        if !record.set_value(field, value) {
            return Err(SnapshotError::WrongType { field });
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_encode_default_record() {
        assert_eq!(
            encode_snapshot(&ProfileRecord::default()).unwrap(),
            concat!(
                r#"[{"name":"First Name","value":""},"#,
                r#"{"name":"Last Name","value":""},"#,
                r#"{"name":"Position","value":""},"#,
                r#"{"name":"Phone","value":""},"#,
                r#"{"name":"Address","value":""},"#,
                r#"{"name":"Interests","value":[]},"#,
                r#"{"name":"Link","value":[]},"#,
                r#"{"name":"Avatar","value":""},"#,
                r#"{"name":"Visibility","value":"Private"}]"#
            )
        );
    }

    #[test]
    fn test_decode_partial_snapshot() {
        let record = decode_snapshot(
            r#"[
                {"name": "Phone", "value": "+79999999999"},
                {"name": "Interests", "value": ["music", "chess"]},
                {"name": "Visibility", "value": "Public"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            record,
            ProfileRecord {
                phone: "+79999999999".to_string(),
                interests: vec!["music".to_string(), "chess".to_string()],
                visibility: "Public".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_decode_normalizes_visibility() {
        let record = decode_snapshot(r#"[{"name": "Visibility", "value": "Everyone"}]"#).unwrap();
        assert_eq!(record.visibility, "Private");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(
            decode_snapshot(r#"{"name": "Phone", "value": "1"}"#),
            Err(SnapshotError::Format(_))
        ));
        assert!(matches!(decode_snapshot("null"), Err(SnapshotError::Format(_))));
        assert!(matches!(decode_snapshot("not json"), Err(SnapshotError::Format(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(matches!(
            decode_snapshot(r#"[{"name": "Nickname", "value": "x"}]"#),
            Err(SnapshotError::UnknownField { .. })
        ));
        assert!(matches!(
            decode_snapshot(r#"[{"name": "Interests", "value": "music"}]"#),
            Err(SnapshotError::WrongType {
                field: FieldName::Interests
            })
        ));
        assert!(matches!(
            decode_snapshot(r#"[{"name": "Phone", "value": ["1"]}]"#),
            Err(SnapshotError::WrongType {
                field: FieldName::Phone
            })
        ));
        assert!(matches!(
            decode_snapshot(r#"[{"name": "Phone", "value": 79999999999}]"#),
            Err(SnapshotError::Format(_))
        ));
        assert!(matches!(
            decode_snapshot(r#"[{"name": "Phone", "value": "1"}, {"name": "Phone", "value": "2"}]"#),
            Err(SnapshotError::DuplicateField {
                field: FieldName::Phone
            })
        ));
    }
}
