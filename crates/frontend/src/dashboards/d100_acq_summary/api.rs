use contracts::dashboards::d100_acq_summary::{
    CollateralMetrics, PoolSummary, TitleMetrics, ValuationMetrics,
};
use contracts::shared::selection::Selection;

use crate::shared::api_utils::get_json;

pub async fn fetch_pool_summary(sel: Selection) -> Result<PoolSummary, String> {
    get_json(&format!("/acq/summary/pool/{}/", sel.path())).await
}

pub async fn fetch_collateral(sel: Selection) -> Result<CollateralMetrics, String> {
    get_json(&format!("/acq/summary/collateral/{}/", sel.path())).await
}

pub async fn fetch_title(sel: Selection) -> Result<TitleMetrics, String> {
    get_json(&format!("/acq/summary/title/{}/", sel.path())).await
}

pub async fn fetch_valuations(sel: Selection) -> Result<ValuationMetrics, String> {
    get_json(&format!("/acq/summary/valuations/{}/", sel.path())).await
}
