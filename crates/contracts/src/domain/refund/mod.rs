pub mod aggregate;
pub mod history;

pub use aggregate::{Refund, RefundDraft, RefundId, RefundMethod, RefundStatus};
pub use history::{field_label, FieldChange, HistoryEntry};
