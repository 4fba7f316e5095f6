//! Tab titles by key.

use crate::domain::a110_am_outcome;

/// Readable title of a tab key; unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    match key {
        "d100_acq_summary" => "Acquisition Summary".to_string(),
        "d110_modeling_center" => "Modeling Center".to_string(),
        "p100_asset_grid" => "Asset Grid".to_string(),
        k => match a110_am_outcome::parse_tab_key(k) {
            Some(id) => a110_am_outcome::tab_title(id),
            None => k.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_static_and_hub_tabs() {
        for key in ["d100_acq_summary", "d110_modeling_center", "p100_asset_grid"] {
            assert_ne!(tab_label_for_key(key), key);
        }
        assert_eq!(tab_label_for_key("a110_am_outcome_7"), "AM: Asset #7");
        assert_eq!(tab_label_for_key("whatever"), "whatever");
    }
}
