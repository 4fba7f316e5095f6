use std::cmp::Ordering;
use std::collections::HashSet;

use contracts::domain::a100_valuation::ValuationField;
use contracts::projections::p100_asset_grid::AssetRow;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::list_utils::{
    clamp_page, cmp_opt, cmp_opt_str, contains_ci, filter_list, paginate, sort_list,
    Searchable, SortState, Sortable,
};

impl Searchable for AssetRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(self.street_address.as_deref(), filter)
            || contains_ci(self.city.as_deref(), filter)
            || contains_ci(self.state.as_deref(), filter)
            || contains_ci(self.zip.as_deref(), filter)
            || contains_ci(self.seller_loan_id.as_deref(), filter)
            || contains_ci(self.asset_status.as_deref(), filter)
            || self
                .row_key()
                .map(|k| k.to_string().contains(filter))
                .unwrap_or(false)
    }
}

impl Sortable for AssetRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "loan_id" => cmp_opt_str(self.seller_loan_id.as_deref(), other.seller_loan_id.as_deref()),
            "address" => cmp_opt_str(self.street_address.as_deref(), other.street_address.as_deref()),
            "state" => cmp_opt_str(self.state.as_deref(), other.state.as_deref()),
            "asset_status" => cmp_opt_str(self.asset_status.as_deref(), other.asset_status.as_deref()),
            "current_balance" => cmp_opt(self.current_balance, other.current_balance),
            "total_debt" => cmp_opt(self.total_debt, other.total_debt),
            "months_dlq" => cmp_opt(self.months_dlq, other.months_dlq),
            "seller_asis_value" => cmp_opt(self.seller_asis_value, other.seller_asis_value),
            "broker_asis_value" => cmp_opt(self.broker_asis_value, other.broker_asis_value),
            "internal_asis" => cmp_opt(
                self.internal_initial_uw_asis_value,
                other.internal_initial_uw_asis_value,
            ),
            "internal_arv" => cmp_opt(
                self.internal_initial_uw_arv_value,
                other.internal_initial_uw_arv_value,
            ),
            "ltv" => cmp_opt(self.ltv_pct(), other.ltv_pct()),
            "next_due_date" => cmp_opt_str(self.next_due_date.as_deref(), other.next_due_date.as_deref()),
            _ => cmp_opt(self.row_key(), other.row_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetGridState {
    pub filter: String,
    pub sort: SortState,
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
    /// Cells whose valuation write is in flight: `(asset_hub_id, column)`.
    saving: HashSet<(i64, ValuationField)>,
}

impl Default for AssetGridState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: SortState::new("asset"),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            saving: HashSet::new(),
        }
    }
}

/// Filtered and sorted rows plus the slice for the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridView {
    pub filtered: Vec<AssetRow>,
    pub page_rows: Vec<AssetRow>,
    pub page: usize,
}

impl AssetGridState {
    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn start_saving(&mut self, hub_id: i64, field: ValuationField) {
        self.saving.insert((hub_id, field));
    }

    pub fn finish_saving(&mut self, hub_id: i64, field: ValuationField) {
        self.saving.remove(&(hub_id, field));
    }

    pub fn is_saving(&self, hub_id: i64, field: ValuationField) -> bool {
        self.saving.contains(&(hub_id, field))
    }

    /// The page is clamped so a shrinking list never leaves the grid on an empty page.
    pub fn view(&self, rows: &[AssetRow]) -> GridView {
        let mut filtered = filter_list(rows, &self.filter);
        sort_list(&mut filtered, &self.sort.field, self.sort.ascending);
        let page = clamp_page(self.page, filtered.len(), self.page_size);
        let page_rows = paginate(&filtered, page, self.page_size);
        GridView {
            filtered,
            page_rows,
            page,
        }
    }
}

pub fn create_state() -> RwSignal<AssetGridState> {
    RwSignal::new(AssetGridState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hub: i64, street: &str, balance: f64) -> AssetRow {
        AssetRow {
            asset_hub_id: Some(hub),
            street_address: Some(street.to_string()),
            current_balance: Some(balance),
            ..Default::default()
        }
    }

    fn rows(n: i64) -> Vec<AssetRow> {
        (1..=n).map(|i| row(i, &format!("{} Main St", i), i as f64 * 1000.0)).collect()
    }

    #[test]
    fn default_sort_is_by_row_key() {
        let state = AssetGridState::default();
        let view = state.view(&[row(3, "c", 1.0), row(1, "a", 1.0), row(2, "b", 1.0)]);
        let keys: Vec<_> = view.filtered.iter().map(|r| r.row_key()).collect();
        assert_eq!(keys, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn filter_shrink_clamps_page() {
        let mut state = AssetGridState {
            page_size: 25,
            page: 3,
            ..Default::default()
        };
        let all = rows(100);
        assert_eq!(state.view(&all).page, 3);

        state.filter = "1 main".to_string();
        let view = state.view(&all);
        assert_eq!(view.page, 0);
        assert!(!view.page_rows.is_empty());
    }

    #[test]
    fn set_filter_resets_page() {
        let mut state = AssetGridState {
            page: 2,
            ..Default::default()
        };
        state.set_filter("oak".into());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn sort_by_balance_descending() {
        let mut state = AssetGridState::default();
        state.sort.toggle("current_balance");
        state.sort.toggle("current_balance");
        let view = state.view(&rows(3));
        assert_eq!(view.page_rows[0].row_key(), Some(3));
    }

    #[test]
    fn saving_cell_is_per_column() {
        let mut state = AssetGridState::default();
        state.start_saving(7, ValuationField::AsIs);
        assert!(state.is_saving(7, ValuationField::AsIs));
        assert!(!state.is_saving(7, ValuationField::Arv));
        assert!(!state.is_saving(8, ValuationField::AsIs));
    }

    #[test]
    fn overlapping_saves_finish_independently() {
        let mut state = AssetGridState::default();
        state.start_saving(7, ValuationField::AsIs);
        state.start_saving(8, ValuationField::Arv);

        state.finish_saving(7, ValuationField::AsIs);
        assert!(!state.is_saving(7, ValuationField::AsIs));
        assert!(state.is_saving(8, ValuationField::Arv));

        state.finish_saving(8, ValuationField::Arv);
        assert_eq!(state, AssetGridState::default());
    }
}
