use contracts::domain::a110_am_outcome::OutcomeKind;
use leptos::prelude::*;
use thaw::*;

use super::outcome_card::OutcomeCard;
use crate::shared::icons::icon;

/// Asset-management workspace of one hub: one task card per outcome.
#[component]
pub fn OutcomesPanel(asset_hub_id: i64) -> impl IntoView {
    let master_collapsed = RwSignal::new(true);

    view! {
        <div class="outcomes-panel">
            <div class="outcomes-panel__header">
                <h2 class="outcomes-panel__title">
                    {icon("tasks")}
                    {format!("Asset #{} outcomes", asset_hub_id)}
                </h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| master_collapsed.update(|c| *c = !*c)
                >
                    {move || if master_collapsed.get() { "Expand all" } else { "Collapse all" }}
                </Button>
            </div>
            <div class="outcomes-panel__grid">
                {OutcomeKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <OutcomeCard
                                kind=kind
                                asset_hub_id=asset_hub_id
                                master_collapsed=master_collapsed
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
