use contracts::dashboards::d110_modeling_center::ModelingRow;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{
    format_multiple, format_optional_currency, format_optional_number, format_optional_percent,
    sign_class,
};
use crate::shared::components::ui::ToneBadge;

fn figure(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-grid__item">
            <div class="detail-grid__label">{label}</div>
            <div class="detail-grid__value">{value}</div>
        </div>
    }
}

/// Modal body for one modeled asset.
#[component]
pub fn ModelingRowDetails(row: ModelingRow, on_open_am: Callback<i64>) -> impl IntoView {
    let hub_id = row.asset_hub_id;
    let outcome = row.outcome();
    let net_pl_class = format!("detail-grid__value {}", sign_class(row.net_pl));
    let address_line = row.address_line();

    view! {
        <div class="modeling-details">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <div class="modeling-details__address">{address_line}</div>
                {outcome.map(|k| view! { <ToneBadge tone=k.tone()>{k.label()}</ToneBadge> })}
            </Flex>

            <div class="detail-grid">
                {figure("Current Balance", format_optional_currency(row.current_balance))}
                {figure("Total Debt", format_optional_currency(row.total_debt))}
                {figure("Seller As-Is", format_optional_currency(row.seller_asis_value))}
                {figure("Bid Price", format_optional_currency(row.bid_price))}
                {figure("Total Costs", format_optional_currency(row.total_costs))}
                {figure("Gross Proceeds", format_optional_currency(row.gross_proceeds))}
                <div class="detail-grid__item">
                    <div class="detail-grid__label">"Net P&L"</div>
                    <div class=net_pl_class>{format_optional_currency(row.net_pl)}</div>
                </div>
                {figure("IRR", format_optional_percent(row.irr.map(|v| v * 100.0), 1))}
                {figure("MOIC", format_multiple(row.moic))}
                {figure("Duration (months)", format_optional_number(row.duration_months, 0))}
            </div>

            {hub_id.map(|id| view! {
                <Flex justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_open_am.run(id)
                    >
                        "Open asset management"
                    </Button>
                </Flex>
            })}
        </div>
    }
}
