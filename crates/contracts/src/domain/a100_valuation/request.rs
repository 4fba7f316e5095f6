use serde::{Deserialize, Serialize};

/// Value column of an internal valuation that can be edited from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationField {
    AsIs,
    Arv,
}

impl ValuationField {
    pub fn label(self) -> &'static str {
        match self {
            ValuationField::AsIs => "As-Is",
            ValuationField::Arv => "ARV",
        }
    }
}

/// Which internal valuation record a PUT targets (`?source=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationSource {
    #[serde(rename = "internalInitialUW")]
    InternalInitialUw,
}

/// Query string of `PUT /acq/valuations/internal/{asset_hub_id}/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationQuery {
    pub source: ValuationSource,
}

/// Body of `PUT /acq/valuations/internal/{asset_hub_id}/`. Only the edited
/// column is sent; the backend leaves the other one untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalValuationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asis_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arv_value: Option<f64>,
}

impl InternalValuationUpdate {
    pub fn for_field(field: ValuationField, value: f64) -> Self {
        match field {
            ValuationField::AsIs => Self {
                asis_value: Some(value),
                arv_value: None,
            },
            ValuationField::Arv => Self {
                asis_value: None,
                arv_value: Some(value),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::money::parse_money_input;

    #[test]
    fn test_edited_currency_is_sent_as_number() {
        let value = parse_money_input("$1,234").unwrap();
        let body = InternalValuationUpdate::for_field(ValuationField::AsIs, value);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "asis_value": 1234.0 })
        );
    }

    #[test]
    fn test_arv_body_omits_asis() {
        let body = InternalValuationUpdate::for_field(ValuationField::Arv, 99.5);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"arv_value":99.5}"#
        );
    }

    #[test]
    fn test_source_wire_name() {
        let q = ValuationQuery {
            source: ValuationSource::InternalInitialUw,
        };
        assert_eq!(
            serde_json::to_value(q).unwrap(),
            serde_json::json!({ "source": "internalInitialUW" })
        );
    }
}
