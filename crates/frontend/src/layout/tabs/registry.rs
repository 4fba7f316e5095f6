//! tab.key → view. Every openable key is matched here.

use crate::dashboards::{AcqSummaryDashboard, ModelingCenterDashboard};
use crate::domain::a110_am_outcome::{self, ui::OutcomesPanel};
use crate::projections::p100_asset_grid::ui::list::AssetGridList;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_acq_summary" => view! { <AcqSummaryDashboard /> }.into_any(),
        "d110_modeling_center" => view! { <ModelingCenterDashboard /> }.into_any(),
        "p100_asset_grid" => view! { <AssetGridList /> }.into_any(),
        k => match a110_am_outcome::parse_tab_key(k) {
            Some(asset_hub_id) => view! { <OutcomesPanel asset_hub_id=asset_hub_id /> }.into_any(),
            None => {
                log!("unknown tab key: '{}'", k);
                view! {
                    <div class="placeholder">{format!("Unknown view: {}", k)}</div>
                }
                .into_any()
            }
        },
    }
}
