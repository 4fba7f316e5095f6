use crate::domain::a110_am_outcome::OutcomeKind;
use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// `GET /acq/modeling-center/{seller}/{trade}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelingCenterResponse {
    pub rows: Vec<ModelingRow>,
}

/// One modeled asset. Money in dollars, `irr` as a fraction (0.12 = 12%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelingRow {
    #[serde(deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_i64")]
    pub asset_hub_id: Option<i64>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub current_balance: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_debt: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seller_asis_value: Option<f64>,
    /// Outcome slug as used by the asset-management endpoints ("fc", "reo", ...)
    pub recommended_outcome: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub bid_price: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_costs: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub gross_proceeds: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub net_pl: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub irr: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub moic: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub duration_months: Option<f64>,
}

impl ModelingRow {
    /// Row identity: `asset_hub_id`, falling back to `id`.
    pub fn row_key(&self) -> Option<i64> {
        self.asset_hub_id.or(self.id)
    }

    pub fn outcome(&self) -> Option<OutcomeKind> {
        self.recommended_outcome
            .as_deref()
            .and_then(OutcomeKind::from_slug)
    }

    pub fn address_line(&self) -> String {
        let parts: Vec<&str> = [
            self.street_address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_prefers_hub_id() {
        let row = ModelingRow {
            id: Some(1),
            asset_hub_id: Some(77),
            ..Default::default()
        };
        assert_eq!(row.row_key(), Some(77));
        let row = ModelingRow {
            id: Some(1),
            ..Default::default()
        };
        assert_eq!(row.row_key(), Some(1));
    }

    #[test]
    fn test_outcome_and_address() {
        let row: ModelingRow = serde_json::from_str(
            r#"{"recommended_outcome": "short-sale", "street_address": "1 Main St", "city": "Austin", "state": null}"#,
        )
        .unwrap();
        assert_eq!(row.outcome(), Some(OutcomeKind::ShortSale));
        assert_eq!(row.address_line(), "1 Main St, Austin");
    }
}
