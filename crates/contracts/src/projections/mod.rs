pub mod p100_asset_grid;
