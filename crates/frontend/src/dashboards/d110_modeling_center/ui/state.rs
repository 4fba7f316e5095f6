use std::cmp::Ordering;

use contracts::dashboards::d110_modeling_center::ModelingRow;

use crate::shared::list_utils::{cmp_opt, cmp_opt_str, contains_ci, Searchable, SortState, Sortable};

impl Searchable for ModelingRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(self.street_address.as_deref(), filter)
            || contains_ci(self.city.as_deref(), filter)
            || contains_ci(self.state.as_deref(), filter)
            || self
                .outcome()
                .map(|k| k.label().to_lowercase().contains(filter))
                .unwrap_or(false)
            || self
                .asset_hub_id
                .map(|id| id.to_string().contains(filter))
                .unwrap_or(false)
    }
}

impl Sortable for ModelingRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "address" => cmp_opt_str(self.street_address.as_deref(), other.street_address.as_deref()),
            "outcome" => cmp_opt(
                self.outcome().map(|k| k.label()),
                other.outcome().map(|k| k.label()),
            ),
            "current_balance" => cmp_opt(self.current_balance, other.current_balance),
            "bid_price" => cmp_opt(self.bid_price, other.bid_price),
            "total_costs" => cmp_opt(self.total_costs, other.total_costs),
            "gross_proceeds" => cmp_opt(self.gross_proceeds, other.gross_proceeds),
            "net_pl" => cmp_opt(self.net_pl, other.net_pl),
            "irr" => cmp_opt(self.irr, other.irr),
            "moic" => cmp_opt(self.moic, other.moic),
            "duration_months" => cmp_opt(self.duration_months, other.duration_months),
            _ => cmp_opt(self.row_key(), other.row_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelingGridState {
    pub filter: String,
    pub sort: SortState,
}

impl Default for ModelingGridState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: SortState::new("net_pl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};

    fn row(hub: i64, address: &str, outcome: &str, net_pl: Option<f64>) -> ModelingRow {
        ModelingRow {
            asset_hub_id: Some(hub),
            street_address: Some(address.to_string()),
            recommended_outcome: Some(outcome.to_string()),
            net_pl,
            ..Default::default()
        }
    }

    #[test]
    fn search_matches_outcome_label() {
        let rows = vec![
            row(1, "1 Main St", "reo", Some(10.0)),
            row(2, "2 Oak Ave", "short-sale", Some(-5.0)),
        ];
        let found = filter_list(&rows, "short");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].asset_hub_id, Some(2));
    }

    #[test]
    fn sort_by_net_pl_descending() {
        let mut rows = vec![
            row(1, "a", "reo", Some(10.0)),
            row(2, "b", "fc", Some(-5.0)),
            row(3, "c", "dil", Some(40.0)),
        ];
        sort_list(&mut rows, "net_pl", false);
        let keys: Vec<_> = rows.iter().map(|r| r.asset_hub_id).collect();
        assert_eq!(keys, vec![Some(3), Some(1), Some(2)]);
    }
}
