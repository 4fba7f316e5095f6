use super::dto::ModelingRow;
use crate::domain::a110_am_outcome::OutcomeKind;
use crate::shared::metrics::CountPct;
use std::collections::BTreeMap;

/// Footer/summary figures of the modeling grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelingTotals {
    pub asset_count: usize,
    pub total_bid: f64,
    pub total_net_pl: f64,
    pub total_costs: f64,
    /// Bid-weighted IRR over rows that have both values.
    pub weighted_irr: Option<f64>,
    /// Recommended outcome counts; rows with an unknown or missing outcome are
    /// counted under `None`.
    pub by_outcome: BTreeMap<Option<OutcomeKind>, usize>,
}

impl ModelingTotals {
    pub fn from_rows(rows: &[ModelingRow]) -> Self {
        let mut totals = Self {
            asset_count: rows.len(),
            ..Default::default()
        };
        let mut irr_weight = 0.0;
        let mut irr_sum = 0.0;

        for row in rows {
            totals.total_bid += row.bid_price.unwrap_or(0.0);
            totals.total_net_pl += row.net_pl.unwrap_or(0.0);
            totals.total_costs += row.total_costs.unwrap_or(0.0);
            if let (Some(irr), Some(bid)) = (row.irr, row.bid_price) {
                if bid > 0.0 {
                    irr_weight += bid;
                    irr_sum += irr * bid;
                }
            }
            *totals.by_outcome.entry(row.outcome()).or_insert(0) += 1;
        }

        if irr_weight > 0.0 {
            totals.weighted_irr = Some(irr_sum / irr_weight);
        }
        totals
    }

    pub fn outcome_share(&self, kind: Option<OutcomeKind>) -> CountPct {
        let count = self.by_outcome.get(&kind).copied().unwrap_or(0);
        CountPct::of(Some(count as u64), Some(self.asset_count as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(outcome: Option<&str>, bid: Option<f64>, net_pl: Option<f64>, irr: Option<f64>) -> ModelingRow {
        ModelingRow {
            recommended_outcome: outcome.map(str::to_string),
            bid_price: bid,
            net_pl,
            irr,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_rows() {
        let t = ModelingTotals::from_rows(&[]);
        assert_eq!(t.asset_count, 0);
        assert_eq!(t.weighted_irr, None);
        assert_eq!(t.outcome_share(Some(OutcomeKind::Reo)).percentage, 0);
    }

    #[test]
    fn test_sums_and_outcomes() {
        let rows = vec![
            row(Some("reo"), Some(100.0), Some(-500.0), Some(0.10)),
            row(Some("reo"), Some(300.0), Some(1500.0), Some(0.20)),
            row(Some("fc"), None, Some(250.0), Some(0.5)),
            row(Some("bogus"), Some(50.0), None, None),
        ];
        let t = ModelingTotals::from_rows(&rows);
        assert_eq!(t.asset_count, 4);
        assert_eq!(t.total_bid, 450.0);
        assert_eq!(t.total_net_pl, 1250.0);
        assert_eq!(t.by_outcome.get(&Some(OutcomeKind::Reo)), Some(&2));
        assert_eq!(t.by_outcome.get(&Some(OutcomeKind::Foreclosure)), Some(&1));
        assert_eq!(t.by_outcome.get(&None), Some(&1));
        assert_eq!(t.outcome_share(Some(OutcomeKind::Reo)).percentage, 50);

        let irr = t.weighted_irr.unwrap();
        assert!((irr - 0.175).abs() < 1e-9);
    }
}
