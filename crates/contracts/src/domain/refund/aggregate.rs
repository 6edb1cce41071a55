use crate::domain::common::EntityMetadata;
use crate::domain::refund::history::{FieldChange, HistoryEntry};
use crate::error::RefundError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefundId(pub Uuid);

impl RefundId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RefundId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for RefundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Processing status of a refund. Display strings match the legacy
/// wire values ("Pending-sent", "ACH-sent", "Ach-returned").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefundStatus {
    Pending,
    PendingSent,
    AchSent,
    Completed,
    AchReturned,
}

impl RefundStatus {
    pub const ALL: [RefundStatus; 5] = [
        RefundStatus::Pending,
        RefundStatus::PendingSent,
        RefundStatus::AchSent,
        RefundStatus::Completed,
        RefundStatus::AchReturned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "Pending",
            RefundStatus::PendingSent => "Pending-sent",
            RefundStatus::AchSent => "ACH-sent",
            RefundStatus::Completed => "Completed",
            RefundStatus::AchReturned => "Ach-returned",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefundMethod {
    Ach,
    Check,
    GiftCard,
    Donation,
}

impl RefundMethod {
    pub const ALL: [RefundMethod; 4] = [
        RefundMethod::Ach,
        RefundMethod::Check,
        RefundMethod::GiftCard,
        RefundMethod::Donation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RefundMethod::Ach => "ACH",
            RefundMethod::Check => "Check",
            RefundMethod::GiftCard => "GiftCard",
            RefundMethod::Donation => "Donation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One refund transaction. Generated at startup, held in memory for the
/// session, mutated in place by the edit dialog, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: RefundId,
    pub status: RefundStatus,

    // Contact
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    // Address
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    pub method: RefundMethod,
    /// Stored numeric; formatted as USD only for display.
    pub amount: f64,
    pub refund_date: NaiveDate,
    pub claimed_date: NaiveDate,

    pub metadata: EntityMetadata,
    /// Append-only change log, oldest first.
    pub history: Vec<HistoryEntry>,
}

impl Refund {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the editable fields from a validated draft.
    ///
    /// Returns the per-field change set (empty when the draft equals the
    /// current values). The caller decides whether to append a history
    /// entry; `updated_at` is only touched when something changed.
    pub fn apply_draft(&mut self, draft: &RefundDraft) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        let mut apply = |field: &'static str, slot: &mut String, new: &str| {
            if slot != new {
                changes.push(FieldChange {
                    field: field.to_string(),
                    old: slot.clone(),
                    new: new.to_string(),
                });
                *slot = new.to_string();
            }
        };

        apply("first_name", &mut self.first_name, &draft.first_name);
        apply("last_name", &mut self.last_name, &draft.last_name);
        apply("email", &mut self.email, &draft.email);
        apply("phone", &mut self.phone, &draft.phone);
        apply("address_line1", &mut self.address_line1, &draft.address_line1);
        apply("address_line2", &mut self.address_line2, &draft.address_line2);
        apply("city", &mut self.city, &draft.city);
        apply("state", &mut self.state, &draft.state);
        apply("zip_code", &mut self.zip_code, &draft.zip_code);

        if !changes.is_empty() {
            self.metadata.touch();
        }
        changes
    }
}

// ============================================================================
// Draft (editable subset)
// ============================================================================

/// Strongly typed snapshot of a record's editable fields.
///
/// The edit dialog binds inputs to a draft; the shared record is only
/// touched when the draft validates and the user saves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefundDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl RefundDraft {
    pub fn from_record(record: &Refund) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address_line1: record.address_line1.clone(),
            address_line2: record.address_line2.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip_code.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), RefundError> {
        if self.first_name.trim().is_empty() {
            return Err(RefundError::invalid("first_name", "First name is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(RefundError::invalid("last_name", "Last name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(RefundError::invalid("email", "Email is required"));
        }
        if !email_shape_ok(self.email.trim()) {
            return Err(RefundError::invalid("email", "Email is not valid"));
        }
        if !self.phone.trim().is_empty()
            && self.phone.chars().filter(|c| c.is_ascii_digit()).count() < 7
        {
            return Err(RefundError::invalid("phone", "Phone must contain at least 7 digits"));
        }
        Ok(())
    }
}

/// Basic shape check: one '@', non-empty local part, dot in the domain.
fn email_shape_ok(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Refund {
        Refund {
            id: RefundId::new_v4(),
            status: RefundStatus::Pending,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "a@x.com".into(),
            phone: "555-010-2030".into(),
            address_line1: "1 Main St".into(),
            address_line2: "Apt 2".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62704".into(),
            method: RefundMethod::Check,
            amount: 120.0,
            refund_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            claimed_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            metadata: EntityMetadata::new(),
            history: Vec::new(),
        }
    }

    #[test]
    fn status_display_strings_match_legacy_values() {
        let labels: Vec<&str> = RefundStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Pending", "Pending-sent", "ACH-sent", "Completed", "Ach-returned"]
        );
        assert_eq!(RefundStatus::parse("ACH-sent"), Some(RefundStatus::AchSent));
        assert_eq!(RefundStatus::parse("nope"), None);
    }

    #[test]
    fn apply_draft_records_only_changed_fields() {
        let mut r = record();
        let mut draft = RefundDraft::from_record(&r);
        draft.email = "b@x.com".into();
        draft.city = "Shelbyville".into();

        let changes = r.apply_draft(&draft);
        assert_eq!(changes.len(), 2);
        assert_eq!(r.email, "b@x.com");
        assert_eq!(r.city, "Shelbyville");
        assert_eq!(r.metadata.version, 1);

        let email_change = changes.iter().find(|c| c.field == "email").unwrap();
        assert_eq!(email_change.old, "a@x.com");
        assert_eq!(email_change.new, "b@x.com");
    }

    #[test]
    fn apply_unchanged_draft_is_a_no_op() {
        let mut r = record();
        let draft = RefundDraft::from_record(&r);
        let changes = r.apply_draft(&draft);
        assert!(changes.is_empty());
        assert_eq!(r.metadata.version, 0);
    }

    #[test]
    fn apply_draft_keeps_the_identifier() {
        let mut r = record();
        let id = r.id;
        let mut draft = RefundDraft::from_record(&r);
        draft.phone = "555-999-0000".into();
        r.apply_draft(&draft);
        assert_eq!(r.id, id);
    }

    #[test]
    fn draft_validation() {
        let r = record();
        let mut draft = RefundDraft::from_record(&r);
        assert!(draft.validate().is_ok());

        draft.first_name = "  ".into();
        assert_eq!(draft.validate().unwrap_err().field(), Some("first_name"));

        draft = RefundDraft::from_record(&r);
        draft.email = "not-an-email".into();
        assert_eq!(draft.validate().unwrap_err().field(), Some("email"));

        draft.email = "a@b".into();
        assert_eq!(draft.validate().unwrap_err().field(), Some("email"));

        draft.email = "a@b.com".into();
        draft.phone = "12345".into();
        assert_eq!(draft.validate().unwrap_err().field(), Some("phone"));

        draft.phone = String::new();
        assert!(draft.validate().is_ok());
    }
}
