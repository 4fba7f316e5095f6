use serde::{Deserialize, Serialize};

/// Fully resolved seller/trade pair. Every pool-scoped request is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub seller_id: i64,
    pub trade_id: i64,
}

impl Selection {
    /// `None` unless both ids are present.
    pub fn from_parts(seller_id: Option<i64>, trade_id: Option<i64>) -> Option<Self> {
        Some(Self {
            seller_id: seller_id?,
            trade_id: trade_id?,
        })
    }

    /// `"{seller_id}/{trade_id}"`, the path suffix shared by the summary endpoints.
    pub fn path(&self) -> String {
        format!("{}/{}", self.seller_id, self.trade_id)
    }
}

/// Seller dropdown entry (`GET /acq/sellers/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerOption {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Trade dropdown entry (`GET /acq/sellers/{id}/trades/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOption {
    pub id: i64,
    #[serde(default)]
    pub trade_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both_ids() {
        assert_eq!(Selection::from_parts(None, Some(12)), None);
        assert_eq!(Selection::from_parts(Some(5), None), None);
        assert_eq!(
            Selection::from_parts(Some(5), Some(12)),
            Some(Selection {
                seller_id: 5,
                trade_id: 12
            })
        );
    }

    #[test]
    fn test_path() {
        let sel = Selection {
            seller_id: 5,
            trade_id: 12,
        };
        assert_eq!(sel.path(), "5/12");
    }

    #[test]
    fn test_trade_option_tolerates_missing_fields() {
        let t: TradeOption = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(t.id, 3);
        assert!(t.trade_name.is_empty());
        assert!(t.status.is_none());
    }
}
