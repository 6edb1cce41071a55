use crate::domain::refunds::store::RefundStore;
use contracts::domain::refund::{RefundDraft, RefundId};
use contracts::RefundError;
use leptos::prelude::*;

/// State behind the edit dialog.
///
/// The inputs bind to `draft`; the shared record is only touched when the
/// draft validates and the user saves. Cancel simply drops the draft.
#[derive(Clone, Copy)]
pub struct RefundDetailsViewModel {
    pub record_id: RefundId,
    pub draft: RwSignal<RefundDraft>,
    pub error: RwSignal<Option<RefundError>>,
    store: RefundStore,
}

impl RefundDetailsViewModel {
    pub fn load(store: RefundStore, record_id: RefundId) -> Self {
        let (draft, error) = match store.get(record_id) {
            Ok(record) => (RefundDraft::from_record(&record), None),
            Err(e) => (RefundDraft::default(), Some(e)),
        };
        Self {
            record_id,
            draft: RwSignal::new(draft),
            error: RwSignal::new(error),
            store,
        }
    }

    /// The record could not be loaded at all (stale modal).
    pub fn is_missing(&self) -> bool {
        self.error
            .with(|e| matches!(e, Some(RefundError::NotFound(_))))
    }

    /// Message for a specific input, when the current error names it.
    pub fn field_error(&self, field: &'static str) -> Option<&'static str> {
        self.error.with(|e| match e {
            Some(RefundError::InvalidField { field: f, message }) if *f == field => Some(*message),
            _ => None,
        })
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let draft = self.draft.get_untracked();
        match self.store.commit_draft(self.record_id, &draft) {
            Ok(()) => {
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
