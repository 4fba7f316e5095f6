//! Card sets of the acquisition dashboard.
//!
//! Each builder accepts the raw responses as `Option` so a failed or pending
//! fetch renders the zero state instead of an error.

use super::dto::{CollateralMetrics, PoolSummary, TitleMetrics, ValuationMetrics};
use crate::shared::metrics::{ratio_percent, MetricCard};

fn total_assets(pool: Option<&PoolSummary>) -> Option<u64> {
    pool.and_then(|p| p.assets)
}

/// Headline numbers of the pool card row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolHeadline {
    pub assets: u64,
    pub current_balance: f64,
    pub total_debt: f64,
    pub seller_asis_value: f64,
    /// Current balance as a percentage of seller as-is value
    pub balance_to_value_pct: Option<f64>,
}

impl PoolHeadline {
    pub fn derive(pool: Option<&PoolSummary>) -> Self {
        let Some(p) = pool else {
            return Self::default();
        };
        Self {
            assets: p.assets.unwrap_or(0),
            current_balance: p.current_balance.unwrap_or(0.0),
            total_debt: p.total_debt.unwrap_or(0.0),
            seller_asis_value: p.seller_asis_value.unwrap_or(0.0),
            balance_to_value_pct: ratio_percent(p.current_balance, p.seller_asis_value),
        }
    }
}

/// Performing/NPL/REO/FC/BK split of the pool.
pub fn status_cards(pool: Option<&PoolSummary>) -> Vec<MetricCard> {
    let total = total_assets(pool);
    let field = |f: fn(&PoolSummary) -> Option<u64>| pool.and_then(f);
    vec![
        MetricCard::new("performing", "Performing", field(|p| p.performing_count), total),
        MetricCard::new("npl", "Non-Performing", field(|p| p.npl_count), total),
        MetricCard::new("reo", "REO", field(|p| p.reo_count), total),
        MetricCard::new("fc", "In Foreclosure", field(|p| p.fc_count), total),
        MetricCard::new("bk", "In Bankruptcy", field(|p| p.bk_count), total),
    ]
}

pub fn collateral_cards(
    pool: Option<&PoolSummary>,
    metrics: Option<&CollateralMetrics>,
) -> Vec<MetricCard> {
    let total = total_assets(pool);
    let field = |f: fn(&CollateralMetrics) -> Option<u64>| metrics.and_then(f);
    vec![
        MetricCard::new(
            "inspections_ordered",
            "Inspections Ordered",
            field(|m| m.ordered),
            total,
        ),
        MetricCard::new(
            "inspections_received",
            "Inspections Received",
            field(|m| m.received),
            total,
        ),
        MetricCard::new("occupied", "Occupied", field(|m| m.occupied), total),
        MetricCard::new("vacant", "Vacant", field(|m| m.vacant), total),
        MetricCard::new("damaged", "Damaged", field(|m| m.damaged), total),
    ]
}

pub fn title_cards(pool: Option<&PoolSummary>, metrics: Option<&TitleMetrics>) -> Vec<MetricCard> {
    let total = total_assets(pool);
    let field = |f: fn(&TitleMetrics) -> Option<u64>| metrics.and_then(f);
    vec![
        MetricCard::new("title_ordered", "Title Ordered", field(|m| m.ordered), total),
        MetricCard::new("title_received", "Title Received", field(|m| m.received), total),
        MetricCard::new("title_clear", "Clear Title", field(|m| m.clear), total),
        MetricCard::new("title_issues", "Title Issues", field(|m| m.with_issues), total),
    ]
}

pub fn valuation_cards(
    pool: Option<&PoolSummary>,
    metrics: Option<&ValuationMetrics>,
) -> Vec<MetricCard> {
    let total = total_assets(pool);
    let field = |f: fn(&ValuationMetrics) -> Option<u64>| metrics.and_then(f);
    vec![
        MetricCard::new("seller_values", "Seller Values", field(|m| m.seller_values), total),
        MetricCard::new("broker_values", "Broker Values", field(|m| m.broker_values), total),
        MetricCard::new(
            "internal_values",
            "Internal UW Values",
            field(|m| m.internal_values),
            total,
        ),
        MetricCard::new(
            "third_party_values",
            "Third-Party Values",
            field(|m| m.third_party_values),
            total,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::CountPct;

    fn find<'a>(cards: &'a [MetricCard], key: &str) -> &'a MetricCard {
        cards.iter().find(|c| c.key == key).unwrap()
    }

    #[test]
    fn test_inspections_ordered_card() {
        let pool = PoolSummary {
            assets: Some(100),
            ..Default::default()
        };
        let collateral = CollateralMetrics {
            ordered: Some(40),
            ..Default::default()
        };
        let cards = collateral_cards(Some(&pool), Some(&collateral));
        let card = find(&cards, "inspections_ordered");
        assert_eq!(card.label, "Inspections Ordered");
        assert_eq!(card.value.ratio_label(), "40 / 100");
        assert_eq!(card.value.percent_label(), "40%");
    }

    #[test]
    fn test_null_metrics_fall_back_to_zero_state() {
        let pool = PoolSummary {
            assets: Some(100),
            ..Default::default()
        };
        for card in collateral_cards(Some(&pool), None)
            .iter()
            .chain(title_cards(Some(&pool), None).iter())
            .chain(valuation_cards(Some(&pool), None).iter())
        {
            assert_eq!(card.value.count, 0);
            assert_eq!(card.value.total, 100);
            assert_eq!(card.value.percentage, 0);
        }
        assert_eq!(PoolHeadline::derive(None), PoolHeadline::default());
    }

    #[test]
    fn test_zero_total_never_divides() {
        let pool = PoolSummary {
            assets: Some(0),
            ..Default::default()
        };
        let title = TitleMetrics {
            ordered: Some(3),
            received: Some(2),
            clear: Some(1),
            with_issues: Some(1),
        };
        for card in title_cards(Some(&pool), Some(&title)) {
            assert_eq!(card.value.percentage, 0);
        }
        for card in status_cards(None) {
            assert_eq!(card.value, CountPct::default());
        }
    }

    #[test]
    fn test_pool_headline() {
        let pool = PoolSummary {
            assets: Some(10),
            current_balance: Some(500_000.0),
            seller_asis_value: Some(1_000_000.0),
            ..Default::default()
        };
        let h = PoolHeadline::derive(Some(&pool));
        assert_eq!(h.assets, 10);
        assert_eq!(h.total_debt, 0.0);
        assert_eq!(h.balance_to_value_pct, Some(50.0));
    }
}
