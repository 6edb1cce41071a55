use serde::{Deserialize, Serialize};

/// One edited field inside a committed change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old: String,
    pub new: String,
}

/// One committed edit of a record.
///
/// Entries are appended oldest-first; the history panel iterates them in
/// reverse so the latest change is at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub at: chrono::DateTime<chrono::Utc>,
    pub actor: String,
    pub changes: Vec<FieldChange>,
}

impl HistoryEntry {
    pub fn now(actor: impl Into<String>, changes: Vec<FieldChange>) -> Self {
        Self {
            at: chrono::Utc::now(),
            actor: actor.into(),
            changes,
        }
    }

    /// Marker entry written when a record is generated.
    pub fn created(at: chrono::DateTime<chrono::Utc>, actor: impl Into<String>) -> Self {
        Self {
            at,
            actor: actor.into(),
            changes: Vec::new(),
        }
    }

    pub fn is_creation(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Human-readable label for a change-log field key.
pub fn field_label(field: &str) -> &'static str {
    match field {
        "first_name" => "First name",
        "last_name" => "Last name",
        "email" => "Email",
        "phone" => "Phone",
        "address_line1" => "Address",
        "address_line2" => "Address line 2",
        "city" => "City",
        "state" => "State",
        "zip_code" => "ZIP code",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_entry_has_no_field_changes() {
        let e = HistoryEntry::created(chrono::Utc::now(), "system");
        assert!(e.is_creation());
        assert_eq!(e.actor, "system");
    }

    #[test]
    fn edit_entry_keeps_change_order() {
        let e = HistoryEntry::now(
            "admin",
            vec![
                FieldChange {
                    field: "email".into(),
                    old: "a@x.com".into(),
                    new: "b@x.com".into(),
                },
                FieldChange {
                    field: "city".into(),
                    old: "Springfield".into(),
                    new: "Shelbyville".into(),
                },
            ],
        );
        assert!(!e.is_creation());
        assert_eq!(e.changes[0].field, "email");
        assert_eq!(e.changes[1].field, "city");
    }

    #[test]
    fn every_editable_field_has_a_label() {
        for key in [
            "first_name",
            "last_name",
            "email",
            "phone",
            "address_line1",
            "address_line2",
            "city",
            "state",
            "zip_code",
        ] {
            assert_ne!(field_label(key), "Field", "missing label for {key}");
        }
        assert_eq!(field_label("unknown"), "Field");
    }
}
