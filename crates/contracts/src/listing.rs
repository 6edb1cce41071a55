//! List reduction: filters, global search, sort, pagination, selection.
//!
//! The table UI holds criteria in signals and calls into these pure
//! functions on every render, so the whole visibility contract is
//! testable without a browser.

use crate::domain::refund::{Refund, RefundId, RefundMethod, RefundStatus};
use crate::format::{format_date_mdy, format_usd};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Criteria selected in the filter panel. Session-only, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefundFilter {
    pub status: Option<RefundStatus>,
    pub method: Option<RefundMethod>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: String,
}

impl RefundFilter {
    /// Number of active criteria (for the filter panel badge).
    pub fn active_count(&self) -> usize {
        let mut n = 0;
        if self.status.is_some() {
            n += 1;
        }
        if self.method.is_some() {
            n += 1;
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            n += 1;
        }
        if !self.search.trim().is_empty() {
            n += 1;
        }
        n
    }
}

/// One data column of the refunds grid.
///
/// `sort_key` names the field the column sorts by, when it is sortable
/// at all. The search box matches only columns flagged `searchable`.
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub searchable: bool,
    pub sort_key: Option<&'static str>,
}

pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        key: "refund_date",
        label: "Refund / Claimed Date",
        searchable: true,
        sort_key: Some("refund_date"),
    },
    ColumnSpec {
        key: "status",
        label: "Status",
        searchable: true,
        sort_key: None,
    },
    // The customer column searches and sorts by email, not by name.
    ColumnSpec {
        key: "customer",
        label: "Customer",
        searchable: true,
        sort_key: Some("email"),
    },
    ColumnSpec {
        key: "amount",
        label: "Amount",
        searchable: true,
        sort_key: Some("amount"),
    },
    ColumnSpec {
        key: "method",
        label: "Method",
        searchable: true,
        sort_key: Some("method"),
    },
];

/// Types matchable by the global search box.
pub trait Searchable {
    fn matches_query(&self, query: &str) -> bool;
}

/// Types sortable by a string field key.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// The value a column displays for one record, exactly as rendered in
/// the cell. Search matches against these, not against raw storage.
pub fn rendered_value(record: &Refund, column_key: &str) -> String {
    match column_key {
        "refund_date" => format_date_mdy(record.refund_date),
        "status" => record.status.as_str().to_string(),
        "customer" => record.email.clone(),
        "amount" => format_usd(record.amount),
        "method" => record.method.as_str().to_string(),
        _ => String::new(),
    }
}

impl Searchable for Refund {
    /// Case-insensitive substring match against the rendered values of
    /// every column flagged `searchable` in `COLUMNS`.
    fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        COLUMNS
            .iter()
            .filter(|c| c.searchable)
            .any(|c| rendered_value(self, c.key).to_lowercase().contains(&needle))
    }
}

impl Sortable for Refund {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "refund_date" => self.refund_date.cmp(&other.refund_date),
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            "method" => self.method.as_str().cmp(other.method.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Apply all active filters, producing the visible subset in input order
/// (pre-sort, pre-pagination).
pub fn visible_subset(records: &[Refund], filter: &RefundFilter) -> Vec<Refund> {
    records
        .iter()
        .filter(|r| filter.status.map_or(true, |s| r.status == s))
        .filter(|r| filter.method.map_or(true, |m| r.method == m))
        .filter(|r| filter.date_from.map_or(true, |from| r.refund_date >= from))
        .filter(|r| filter.date_to.map_or(true, |to| r.refund_date <= to))
        .filter(|r| r.matches_query(&filter.search))
        .cloned()
        .collect()
}

/// Sort in place by the given field key.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a page index to the valid range for the current total.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        page.min(total_pages - 1)
    }
}

/// The rows shown on one page of the visible subset.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Drop selected ids that are no longer in the visible subset, so the
/// "N of M selected" readout never counts hidden rows.
pub fn prune_selection(selected: &mut HashSet<RefundId>, visible: &[Refund]) {
    let visible_ids: HashSet<RefundId> = visible.iter().map(|r| r.id).collect();
    selected.retain(|id| visible_ids.contains(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_refunds;

    fn dataset() -> Vec<Refund> {
        generate_refunds(7, 10)
    }

    fn with_status(mut records: Vec<Refund>, statuses: &[RefundStatus]) -> Vec<Refund> {
        for (r, s) in records.iter_mut().zip(statuses.iter().cycle()) {
            r.status = *s;
        }
        records
    }

    #[test]
    fn unset_status_filter_is_a_no_op() {
        let records = dataset();
        let filter = RefundFilter::default();
        assert_eq!(visible_subset(&records, &filter).len(), records.len());
    }

    #[test]
    fn status_filter_matches_exactly() {
        // 10 records, statuses cycled so exactly 3 are Completed.
        let records = with_status(
            dataset(),
            &[
                RefundStatus::Completed,
                RefundStatus::Pending,
                RefundStatus::PendingSent,
                RefundStatus::Completed,
                RefundStatus::AchSent,
                RefundStatus::AchReturned,
                RefundStatus::Completed,
                RefundStatus::Pending,
                RefundStatus::Pending,
                RefundStatus::AchSent,
            ],
        );
        let filter = RefundFilter {
            status: Some(RefundStatus::Completed),
            ..Default::default()
        };
        let visible = visible_subset(&records, &filter);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|r| r.status == RefundStatus::Completed));
    }

    #[test]
    fn method_filter_matches_exactly() {
        let records = dataset();
        let filter = RefundFilter {
            method: Some(RefundMethod::Check),
            ..Default::default()
        };
        let visible = visible_subset(&records, &filter);
        assert!(visible.iter().all(|r| r.method == RefundMethod::Check));
        let expected = records
            .iter()
            .filter(|r| r.method == RefundMethod::Check)
            .count();
        assert_eq!(visible.len(), expected);
    }

    #[test]
    fn date_range_is_inclusive() {
        let records = dataset();
        let pivot = records[0].refund_date;
        let filter = RefundFilter {
            date_from: Some(pivot),
            date_to: Some(pivot),
            ..Default::default()
        };
        let visible = visible_subset(&records, &filter);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.refund_date == pivot));
    }

    #[test]
    fn search_matches_rendered_values_case_insensitively() {
        let mut records = dataset();
        records[0].email = "Unique.Needle@example.com".into();
        let filter = RefundFilter {
            search: "unique.needle".into(),
            ..Default::default()
        };
        let visible = visible_subset(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, records[0].id);

        // Amount matches against the USD-rendered value, separators included.
        records[1].amount = 1234.5;
        let filter = RefundFilter {
            search: "$1,234.50".into(),
            ..Default::default()
        };
        assert!(visible_subset(&records, &filter)
            .iter()
            .any(|r| r.id == records[1].id));
    }

    #[test]
    fn search_miss_hides_everything() {
        let records = dataset();
        let filter = RefundFilter {
            search: "zzz-no-such-value-zzz".into(),
            ..Default::default()
        };
        assert!(visible_subset(&records, &filter).is_empty());
    }

    #[test]
    fn amount_sort_desc_is_reverse_of_asc() {
        let mut records = dataset();
        // Distinct amounts, so reversing is the only valid descending order.
        for (i, r) in records.iter_mut().enumerate() {
            r.amount = 100.0 + i as f64;
        }
        let mut asc = records.clone();
        sort_list(&mut asc, "amount", true);
        let mut desc = records.clone();
        sort_list(&mut desc, "amount", false);

        let asc_ids: Vec<RefundId> = asc.iter().map(|r| r.id).collect();
        let mut desc_ids: Vec<RefundId> = desc.iter().map(|r| r.id).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);

        // Sort is a permutation, not a filter.
        assert_eq!(asc.len(), records.len());
    }

    #[test]
    fn selection_pruned_when_filter_narrows() {
        let records = with_status(
            dataset(),
            &[RefundStatus::Completed, RefundStatus::Pending],
        );
        // Select everything visible under no filter.
        let mut selected: HashSet<RefundId> = records.iter().map(|r| r.id).collect();

        let filter = RefundFilter {
            status: Some(RefundStatus::Completed),
            ..Default::default()
        };
        let visible = visible_subset(&records, &filter);
        prune_selection(&mut selected, &visible);

        assert_eq!(selected.len(), visible.len());
        for id in &selected {
            assert!(visible.iter().any(|r| r.id == *id));
        }
    }

    #[test]
    fn column_sort_keys_are_understood_by_the_comparator() {
        let records = dataset();
        for key in COLUMNS.iter().filter_map(|c| c.sort_key) {
            // A recognized key orders at least one pair; an unknown key
            // would fall through to Equal for every pair.
            let distinguishes = records.iter().any(|a| {
                records
                    .iter()
                    .any(|b| a.compare_by_field(b, key) != Ordering::Equal)
            });
            assert!(distinguishes, "sort key {key} never distinguishes records");
        }
    }

    #[test]
    fn pagination_boundaries() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(clamp_page(5, 2), 1);
        assert_eq!(clamp_page(0, 0), 0);

        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 0, 10).len(), 10);
        assert_eq!(page_slice(&items, 2, 10), vec![20, 21, 22, 23, 24]);
        assert!(page_slice(&items, 9, 10).is_empty());
    }
}
