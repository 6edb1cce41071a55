use contracts::domain::refund::{HistoryEntry, Refund, RefundDraft, RefundId};
use contracts::{mock, RefundError};
use leptos::prelude::*;

/// Actor recorded on history entries produced by the edit dialog.
const EDIT_ACTOR: &str = "admin";

/// Seed for the demo dataset. Fixed so reloads show the same records.
const DATASET_SEED: u64 = 0x5eed_2026;

/// In-memory refund collection shared through context.
///
/// Nothing is persisted: the dataset is regenerated on every page load
/// and edits live only as long as the tab.
#[derive(Clone, Copy)]
pub struct RefundStore {
    records: RwSignal<Vec<Refund>>,
}

impl RefundStore {
    pub fn seeded() -> Self {
        Self {
            records: RwSignal::new(mock::generate_refunds(DATASET_SEED, mock::DEFAULT_COUNT)),
        }
    }

    pub fn records(&self) -> ReadSignal<Vec<Refund>> {
        self.records.read_only()
    }

    pub fn get(&self, id: RefundId) -> Result<Refund, RefundError> {
        self.records
            .with_untracked(|records| records.iter().find(|r| r.id == id).cloned())
            .ok_or(RefundError::NotFound(id))
    }

    /// Validates the draft and applies it to the matching record.
    /// A history entry is appended only when at least one field changed.
    pub fn commit_draft(&self, id: RefundId, draft: &RefundDraft) -> Result<(), RefundError> {
        draft.validate()?;
        let exists = self
            .records
            .with_untracked(|records| records.iter().any(|r| r.id == id));
        if !exists {
            return Err(RefundError::NotFound(id));
        }
        self.records.update(|records| {
            if let Some(record) = records.iter_mut().find(|r| r.id == id) {
                let changes = record.apply_draft(draft);
                if !changes.is_empty() {
                    record.history.push(HistoryEntry::now(EDIT_ACTOR, changes));
                }
            }
        });
        Ok(())
    }

    pub fn history(&self, id: RefundId) -> Result<Vec<HistoryEntry>, RefundError> {
        self.get(id).map(|record| record.history)
    }
}

pub fn use_refund_store() -> RefundStore {
    use_context::<RefundStore>().expect("RefundStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_dataset() -> (RefundStore, RefundId) {
        let records = mock::generate_refunds(11, 4);
        let id = records[0].id;
        let store = RefundStore {
            records: RwSignal::new(records),
        };
        (store, id)
    }

    #[test]
    fn changed_save_appends_one_entry_with_exactly_the_changed_fields() {
        let (store, id) = store_with_dataset();
        let mut draft = RefundDraft::from_record(&store.get(id).unwrap());
        draft.email = "edited@example.com".into();
        draft.city = "Shelbyville".into();

        store.commit_draft(id, &draft).unwrap();

        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 2);
        let entry = history.last().unwrap();
        assert_eq!(entry.actor, EDIT_ACTOR);
        let fields: Vec<&str> = entry.changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "city"]);

        let record = store.get(id).unwrap();
        assert_eq!(record.email, "edited@example.com");
        assert_eq!(record.city, "Shelbyville");
    }

    #[test]
    fn unchanged_save_appends_nothing() {
        let (store, id) = store_with_dataset();
        let before = store.get(id).unwrap();
        let draft = RefundDraft::from_record(&before);

        store.commit_draft(id, &draft).unwrap();

        // History, metadata version, everything: untouched.
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn invalid_draft_commits_nothing() {
        let (store, id) = store_with_dataset();
        let before = store.get(id).unwrap();
        let mut draft = RefundDraft::from_record(&before);
        draft.email = "not-an-email".into();

        let err = store.commit_draft(id, &draft).unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn stale_id_validates_first_then_reports_not_found() {
        let (store, id) = store_with_dataset();
        let valid = RefundDraft::from_record(&store.get(id).unwrap());
        let missing = RefundId::new_v4();

        assert!(matches!(
            store.commit_draft(missing, &valid),
            Err(RefundError::NotFound(_))
        ));

        // A malformed draft is rejected before the lookup even runs.
        let mut invalid = valid.clone();
        invalid.first_name = String::new();
        assert_eq!(
            store.commit_draft(missing, &invalid).unwrap_err().field(),
            Some("first_name")
        );
    }
}
