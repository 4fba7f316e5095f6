use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// One loan/property row of the acquisition asset grid
/// (`GET /acq/assets/{seller}/{trade}/`).
///
/// The backend flattens loan, property and valuation data into this row and
/// omits whatever it does not have, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRow {
    #[serde(deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_i64")]
    pub asset_hub_id: Option<i64>,
    pub seller_loan_id: Option<String>,

    // Property
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub property_type: Option<String>,
    pub occupancy: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub beds: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub baths: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub sq_ft: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub year_built: Option<u32>,

    // Loan
    pub asset_status: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub lien_position: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub original_balance: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub current_balance: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_debt: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub interest_rate: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub months_dlq: Option<f64>,
    pub origination_date: Option<String>,
    pub last_paid_date: Option<String>,
    pub next_due_date: Option<String>,
    pub maturity_date: Option<String>,
    pub fc_flag: Option<bool>,
    pub bk_flag: Option<bool>,

    // Valuations
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seller_asis_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seller_arv_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub broker_asis_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub broker_arv_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub internal_initial_uw_asis_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub internal_initial_uw_arv_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub third_party_asis_value: Option<f64>,

    // Diligence
    pub title_status: Option<String>,
    pub collateral_status: Option<String>,
}

impl AssetRow {
    /// Row identity: `asset_hub_id`, falling back to `id`.
    pub fn row_key(&self) -> Option<i64> {
        self.asset_hub_id.or(self.id)
    }

    pub fn address_line(&self) -> String {
        let city_state = match (self.city.as_deref(), self.state.as_deref()) {
            (Some(c), Some(s)) => format!("{}, {}", c, s),
            (Some(c), None) => c.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => String::new(),
        };
        match self.street_address.as_deref() {
            Some(street) if !city_state.is_empty() => format!("{} {}", street, city_state),
            Some(street) => street.to_string(),
            None => city_state,
        }
    }

    /// Current balance over the best available as-is value, in percent.
    /// Internal underwriting wins over broker, broker over seller.
    pub fn ltv_pct(&self) -> Option<f64> {
        let value = self
            .internal_initial_uw_asis_value
            .or(self.broker_asis_value)
            .or(self.seller_asis_value)?;
        crate::shared::metrics::ratio_percent(self.current_balance, Some(value))
    }
}

/// Sums shown in the grid totals row for the currently filtered rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetGridTotals {
    pub rows: usize,
    pub current_balance: f64,
    pub total_debt: f64,
    pub seller_asis_value: f64,
    pub internal_initial_uw_asis_value: f64,
    pub internal_initial_uw_arv_value: f64,
}

impl AssetGridTotals {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a AssetRow>) -> Self {
        rows.into_iter().fold(Self::default(), |mut t, r| {
            t.rows += 1;
            t.current_balance += r.current_balance.unwrap_or(0.0);
            t.total_debt += r.total_debt.unwrap_or(0.0);
            t.seller_asis_value += r.seller_asis_value.unwrap_or(0.0);
            t.internal_initial_uw_asis_value += r.internal_initial_uw_asis_value.unwrap_or(0.0);
            t.internal_initial_uw_arv_value += r.internal_initial_uw_arv_value.unwrap_or(0.0);
            t
        })
    }
}

/// Drill-down payload (`GET /acq/assets/detail/{asset_hub_id}/`): the grid row
/// plus history the grid does not carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDetail {
    #[serde(flatten)]
    pub row: AssetRow,
    pub valuation_history: Vec<ValuationHistoryEntry>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationHistoryEntry {
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub asis_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub arv_value: Option<f64>,
    pub value_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_row_deserializes() {
        let row: AssetRow =
            serde_json::from_str(r#"{"asset_hub_id": 9, "current_balance": 1000.5, "beds": null}"#)
                .unwrap();
        assert_eq!(row.row_key(), Some(9));
        assert_eq!(row.current_balance, Some(1000.5));
        assert_eq!(row.beds, None);
    }

    #[test]
    fn test_address_line() {
        let row = AssetRow {
            street_address: Some("12 Oak Ave".into()),
            city: Some("Tampa".into()),
            state: Some("FL".into()),
            ..Default::default()
        };
        assert_eq!(row.address_line(), "12 Oak Ave Tampa, FL");
        assert_eq!(AssetRow::default().address_line(), "");
    }

    #[test]
    fn test_ltv_prefers_internal_value() {
        let row = AssetRow {
            current_balance: Some(50.0),
            seller_asis_value: Some(50.0),
            internal_initial_uw_asis_value: Some(200.0),
            ..Default::default()
        };
        assert_eq!(row.ltv_pct(), Some(25.0));
        let no_value = AssetRow {
            current_balance: Some(50.0),
            ..Default::default()
        };
        assert_eq!(no_value.ltv_pct(), None);
    }

    #[test]
    fn test_totals() {
        let rows = vec![
            AssetRow {
                current_balance: Some(100.0),
                total_debt: Some(120.0),
                ..Default::default()
            },
            AssetRow {
                current_balance: Some(50.0),
                internal_initial_uw_asis_value: Some(80.0),
                ..Default::default()
            },
        ];
        let t = AssetGridTotals::from_rows(&rows);
        assert_eq!(t.rows, 2);
        assert_eq!(t.current_balance, 150.0);
        assert_eq!(t.total_debt, 120.0);
        assert_eq!(t.internal_initial_uw_asis_value, 80.0);
    }

    #[test]
    fn test_detail_flattens_row() {
        let d: AssetDetail = serde_json::from_str(
            r#"{"asset_hub_id": 4, "city": "Reno", "valuation_history": [{"source": "broker", "asis_value": 10.0}]}"#,
        )
        .unwrap();
        assert_eq!(d.row.row_key(), Some(4));
        assert_eq!(d.row.city.as_deref(), Some("Reno"));
        assert_eq!(d.valuation_history.len(), 1);
    }

    #[test]
    fn test_decimal_strings_and_bad_values_in_row() {
        let row: AssetRow = serde_json::from_str(
            r#"{"asset_hub_id": "12", "current_balance": "150000.50", "beds": 3.0, "months_dlq": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(row.row_key(), Some(12));
        assert_eq!(row.current_balance, Some(150000.5));
        assert_eq!(row.beds, Some(3));
        assert_eq!(row.months_dlq, None);
    }
}
