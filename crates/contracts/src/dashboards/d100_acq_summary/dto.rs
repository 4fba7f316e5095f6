use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// `GET /acq/summary/pool/{seller}/{trade}/`
///
/// Every field is optional: the backend omits or nulls whatever it could not
/// compute for the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSummary {
    /// Number of assets in the pool; the denominator for every dashboard card.
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub assets: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub current_balance: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_debt: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seller_asis_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seller_arv_value: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub avg_months_dlq: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub performing_count: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub npl_count: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub reo_count: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub fc_count: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub bk_count: Option<u64>,
}

/// `GET /acq/summary/collateral/{seller}/{trade}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollateralMetrics {
    /// Inspections ordered
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub ordered: Option<u64>,
    /// Inspection reports received
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub received: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub occupied: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub vacant: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub damaged: Option<u64>,
}

/// `GET /acq/summary/title/{seller}/{trade}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleMetrics {
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub ordered: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub received: Option<u64>,
    /// Received reports without open issues
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub clear: Option<u64>,
    /// Received reports with senior liens or other curative items
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub with_issues: Option<u64>,
}

/// `GET /acq/summary/valuations/{seller}/{trade}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationMetrics {
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub seller_values: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub broker_values: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub internal_values: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub third_party_values: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_internal_asis: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_internal_arv: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_deserialize() {
        let s: PoolSummary =
            serde_json::from_str(r#"{"assets": 100, "current_balance": null}"#).unwrap();
        assert_eq!(s.assets, Some(100));
        assert_eq!(s.current_balance, None);
        assert_eq!(s.total_debt, None);

        let c: CollateralMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(c, CollateralMetrics::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let t: TitleMetrics =
            serde_json::from_str(r#"{"ordered": 7, "vendor": "acme"}"#).unwrap();
        assert_eq!(t.ordered, Some(7));
    }

    #[test]
    fn test_unreadable_field_only_drops_itself() {
        let s: PoolSummary =
            serde_json::from_str(r#"{"assets": 100, "current_balance": "12345.67"}"#).unwrap();
        assert_eq!(s.assets, Some(100));
        assert_eq!(s.current_balance, Some(12345.67));

        let s: PoolSummary = serde_json::from_str(r#"{"assets": 100.0}"#).unwrap();
        assert_eq!(s.assets, Some(100));

        let c: CollateralMetrics =
            serde_json::from_str(r#"{"ordered": 40, "damaged": "n/a"}"#).unwrap();
        assert_eq!(c.ordered, Some(40));
        assert_eq!(c.damaged, None);
    }
}
