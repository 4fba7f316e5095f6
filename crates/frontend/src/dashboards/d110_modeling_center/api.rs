use contracts::dashboards::d110_modeling_center::{ModelingCenterResponse, ModelingRow};
use contracts::shared::selection::Selection;

use crate::shared::api_utils::get_json;

pub async fn fetch_modeling_rows(sel: Selection) -> Result<Vec<ModelingRow>, String> {
    let response: ModelingCenterResponse =
        get_json(&format!("/acq/modeling-center/{}/", sel.path())).await?;
    Ok(response.rows)
}
