pub mod api;
pub mod store;
pub mod ui;

pub use store::{use_asset_rows, AssetRowStore};
