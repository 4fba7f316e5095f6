use contracts::domain::a100_valuation::{
    InternalValuationUpdate, ValuationField, ValuationQuery, ValuationSource,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok};

fn internal_valuation_path(asset_hub_id: i64, source: ValuationSource) -> Result<String, String> {
    let query = serde_qs::to_string(&ValuationQuery { source })
        .map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(format!("/acq/valuations/internal/{}/?{}", asset_hub_id, query))
}

/// Overwrite one internal underwriting value of an asset.
pub async fn put_internal_valuation(
    asset_hub_id: i64,
    field: ValuationField,
    value: f64,
) -> Result<(), String> {
    let path = internal_valuation_path(asset_hub_id, ValuationSource::InternalInitialUw)?;
    let body = InternalValuationUpdate::for_field(field, value);

    let response = Request::put(&api_url(&path))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_carries_source_query() {
        assert_eq!(
            internal_valuation_path(42, ValuationSource::InternalInitialUw).unwrap(),
            "/acq/valuations/internal/42/?source=internalInitialUW"
        );
    }
}
