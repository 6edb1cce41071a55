use chrono::NaiveDate;
use contracts::domain::refund::{RefundMethod, RefundStatus};
use contracts::listing::RefundFilter;
use leptos::prelude::*;

/// Filter, sort and pagination state for the refunds list.
///
/// Selection lives in its own signal next to this one so that pruning the
/// selection does not re-run every subscriber of the criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundsListState {
    pub status: Option<RefundStatus>,
    pub method: Option<RefundMethod>,
    /// yyyy-mm-dd, empty = unset (matches the native date input).
    pub date_from: String,
    pub date_to: String,
    pub search: String,

    pub sort_field: String,
    pub sort_ascending: bool,

    pub current_page: usize,
    pub page_size: usize,
}

impl Default for RefundsListState {
    fn default() -> Self {
        Self {
            status: None,
            method: None,
            date_from: String::new(),
            date_to: String::new(),
            search: String::new(),
            // Latest refunds first.
            sort_field: "refund_date".to_string(),
            sort_ascending: false,
            current_page: 0,
            page_size: 10,
        }
    }
}

impl RefundsListState {
    pub fn filter(&self) -> RefundFilter {
        RefundFilter {
            status: self.status,
            method: self.method,
            date_from: parse_input_date(&self.date_from),
            date_to: parse_input_date(&self.date_to),
            search: self.search.clone(),
        }
    }

    /// Toggle direction on the active column, or switch to a new column
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

fn parse_input_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn create_state() -> RwSignal<RefundsListState> {
    RwSignal::new(RefundsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sorts_by_refund_date_descending() {
        let s = RefundsListState::default();
        assert_eq!(s.sort_field, "refund_date");
        assert!(!s.sort_ascending);
        assert_eq!(s.page_size, 10);
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_column() {
        let mut s = RefundsListState::default();
        s.toggle_sort("refund_date");
        assert!(s.sort_ascending);
        s.toggle_sort("refund_date");
        assert!(!s.sort_ascending);
    }

    #[test]
    fn toggle_sort_switches_column_ascending() {
        let mut s = RefundsListState::default();
        s.toggle_sort("amount");
        assert_eq!(s.sort_field, "amount");
        assert!(s.sort_ascending);
    }

    #[test]
    fn filter_parses_date_inputs() {
        let s = RefundsListState {
            date_from: "2026-01-15".into(),
            date_to: "not-a-date".into(),
            ..Default::default()
        };
        let f = s.filter();
        assert_eq!(f.date_from, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(f.date_to, None);
    }
}
