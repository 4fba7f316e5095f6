//! Asset-management outcome workspace of a single asset hub.

pub mod api;
pub mod ui;

const TAB_PREFIX: &str = "a110_am_outcome_";

pub fn tab_key(asset_hub_id: i64) -> String {
    format!("{}{}", TAB_PREFIX, asset_hub_id)
}

pub fn tab_title(asset_hub_id: i64) -> String {
    format!("AM: Asset #{}", asset_hub_id)
}

pub fn parse_tab_key(key: &str) -> Option<i64> {
    key.strip_prefix(TAB_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_key_round_trip() {
        assert_eq!(tab_key(42), "a110_am_outcome_42");
        assert_eq!(parse_tab_key(&tab_key(42)), Some(42));
        assert_eq!(parse_tab_key("a110_am_outcome_"), None);
        assert_eq!(parse_tab_key("p100_asset_grid"), None);
    }
}
