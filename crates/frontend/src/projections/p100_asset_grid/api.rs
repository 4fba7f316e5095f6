use contracts::projections::p100_asset_grid::{AssetDetail, AssetRow};
use contracts::shared::selection::Selection;

use crate::shared::api_utils::get_json;

pub async fn fetch_asset_rows(sel: Selection) -> Result<Vec<AssetRow>, String> {
    get_json(&format!("/acq/assets/{}/", sel.path())).await
}

pub async fn fetch_asset_detail(asset_hub_id: i64) -> Result<AssetDetail, String> {
    get_json(&format!("/acq/assets/detail/{}/", asset_hub_id)).await
}
