use contracts::shared::selection::{SellerOption, TradeOption};

use crate::shared::api_utils::get_json;

pub async fn fetch_sellers() -> Result<Vec<SellerOption>, String> {
    get_json("/acq/sellers/").await
}

pub async fn fetch_trades(seller_id: i64) -> Result<Vec<TradeOption>, String> {
    get_json(&format!("/acq/sellers/{}/trades/", seller_id)).await
}
