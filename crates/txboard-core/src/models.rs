//! Core data models for transactions and drafts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A transaction as stored and signed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Identifier assigned by the backend
    pub id: i64,
    /// Whether the backend verified the signature
    pub valid: bool,
    /// Signer public key, display only
    pub public_key: String,
    /// Signature over `transaction_data_string`, display only
    pub signature: String,
    /// The signed payload as the backend serialized it
    pub transaction_data_string: String,
}

impl TransactionRecord {
    /// Literal text shown in the "Valid" column
    pub fn valid_label(&self) -> &'static str {
        if self.valid {
            "True"
        } else {
            "False"
        }
    }
}

/// Client-side shape submitted to create a transaction
///
/// Unknown field names are kept in `extra` and serialized alongside the
/// three known fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub full_names: String,
    pub practice_number: String,
    pub notes: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl DraftRecord {
    /// An empty draft, as handed to a freshly opened form
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a field by name; names outside the known three land in `extra`
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "full_names" => self.full_names = value,
            "practice_number" => self.practice_number = value,
            "notes" => self.notes = value,
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }

    /// Read a field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "full_names" => Some(&self.full_names),
            "practice_number" => Some(&self.practice_number),
            "notes" => Some(&self.notes),
            _ => self.extra.get(name).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_backend_json() {
        let records: Vec<TransactionRecord> = serde_json::from_value(json!([
            {"id": 1, "valid": true, "public_key": "pk1", "signature": "sig1", "transaction_data_string": "abc"},
            {"id": 2, "valid": false, "public_key": "pk2", "signature": "sig2", "transaction_data_string": "def"}
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].transaction_data_string, "abc");
        assert_eq!(records[1].public_key, "pk2");
    }

    #[test]
    fn test_valid_label() {
        for valid in [true, false] {
            let record = TransactionRecord {
                id: 7,
                valid,
                public_key: String::new(),
                signature: String::new(),
                transaction_data_string: String::new(),
            };
            assert_eq!(record.valid_label(), if valid { "True" } else { "False" });
        }
    }

    #[test]
    fn test_empty_draft_serializes_to_three_fields() {
        let body = serde_json::to_value(DraftRecord::empty()).unwrap();
        assert_eq!(body, json!({"full_names": "", "practice_number": "", "notes": ""}));
    }

    #[test]
    fn test_set_field_touches_only_named_field() {
        let mut draft = DraftRecord::empty();
        draft.set_field("practice_number", "123");
        assert_eq!(draft.practice_number, "123");
        assert_eq!(draft.full_names, "");
        assert_eq!(draft.notes, "");
        assert!(draft.extra.is_empty());
    }

    #[test]
    fn test_unknown_field_is_merged_into_body() {
        let mut draft = DraftRecord::empty();
        draft.set_field("full_names", "Jane Doe");
        draft.set_field("title", "Dr");

        assert_eq!(draft.field("title"), Some("Dr"));
        assert_eq!(draft.field("missing"), None);

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            json!({"full_names": "Jane Doe", "practice_number": "", "notes": "", "title": "Dr"})
        );
    }
}
