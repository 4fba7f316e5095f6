use contracts::projections::p100_asset_grid::{AssetDetail, ValuationHistoryEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p100_asset_grid::api;
use crate::shared::components::table::{
    format_optional_currency, format_optional_number, format_optional_percent,
};
use crate::shared::components::ErrorBanner;
use crate::shared::date_utils::{format_optional_date, EMPTY_CELL};

fn text(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

fn flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

fn section(title: &'static str, items: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <section class="detail-section">
            <h3 class="detail-section__title">{title}</h3>
            <div class="detail-grid">
                {items
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="detail-grid__item">
                                <div class="detail-grid__label">{label}</div>
                                <div class="detail-grid__value">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn history_table(history: Vec<ValuationHistoryEntry>) -> impl IntoView {
    if history.is_empty() {
        return view! { <div class="text-muted">"No valuation history."</div> }.into_any();
    }
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Source"</TableHeaderCell>
                    <TableHeaderCell>"As-Is"</TableHeaderCell>
                    <TableHeaderCell>"ARV"</TableHeaderCell>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {history
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <TableRow>
                                <TableCell>{text(&entry.source)}</TableCell>
                                <TableCell class="text-right">{format_optional_currency(entry.asis_value)}</TableCell>
                                <TableCell class="text-right">{format_optional_currency(entry.arv_value)}</TableCell>
                                <TableCell>{format_optional_date(entry.value_date.as_deref())}</TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}

fn detail_body(detail: AssetDetail) -> impl IntoView {
    let r = detail.row;
    let loan = vec![
        ("Seller Loan ID", text(&r.seller_loan_id)),
        ("Status", text(&r.asset_status)),
        ("Lien Position", format_optional_number(r.lien_position.map(f64::from), 0)),
        ("Original Balance", format_optional_currency(r.original_balance)),
        ("Current Balance", format_optional_currency(r.current_balance)),
        ("Total Debt", format_optional_currency(r.total_debt)),
        ("Interest Rate", format_optional_percent(r.interest_rate, 3)),
        ("Months DLQ", format_optional_number(r.months_dlq, 0)),
        ("Origination", format_optional_date(r.origination_date.as_deref())),
        ("Last Paid", format_optional_date(r.last_paid_date.as_deref())),
        ("Next Due", format_optional_date(r.next_due_date.as_deref())),
        ("Maturity", format_optional_date(r.maturity_date.as_deref())),
        ("Foreclosure", flag(r.fc_flag)),
        ("Bankruptcy", flag(r.bk_flag)),
    ];
    let property = vec![
        ("Address", r.address_line()),
        ("ZIP", text(&r.zip)),
        ("Property Type", text(&r.property_type)),
        ("Occupancy", text(&r.occupancy)),
        ("Beds", format_optional_number(r.beds.map(f64::from), 0)),
        ("Baths", format_optional_number(r.baths, 1)),
        ("Sq Ft", format_optional_number(r.sq_ft.map(f64::from), 0)),
        ("Year Built", r.year_built.map(|y| y.to_string()).unwrap_or_else(|| EMPTY_CELL.to_string())),
        ("Title", text(&r.title_status)),
        ("Collateral", text(&r.collateral_status)),
    ];
    let values = vec![
        ("Seller As-Is", format_optional_currency(r.seller_asis_value)),
        ("Seller ARV", format_optional_currency(r.seller_arv_value)),
        ("Broker As-Is", format_optional_currency(r.broker_asis_value)),
        ("Broker ARV", format_optional_currency(r.broker_arv_value)),
        ("Internal UW As-Is", format_optional_currency(r.internal_initial_uw_asis_value)),
        ("Internal UW ARV", format_optional_currency(r.internal_initial_uw_arv_value)),
        ("Third-Party As-Is", format_optional_currency(r.third_party_asis_value)),
        ("LTV", format_optional_percent(r.ltv_pct(), 1)),
    ];
    let notes = detail.notes.filter(|n| !n.trim().is_empty());

    view! {
        <div class="asset-detail">
            {section("Loan", loan)}
            {section("Property", property)}
            {section("Valuations", values)}
            <section class="detail-section">
                <h3 class="detail-section__title">"Valuation History"</h3>
                {history_table(detail.valuation_history)}
            </section>
            {notes.map(|n| view! {
                <section class="detail-section">
                    <h3 class="detail-section__title">"Notes"</h3>
                    <p class="asset-detail__notes">{n}</p>
                </section>
            })}
        </div>
    }
}

/// Drill-down of one asset, loaded by hub id each time it is mounted.
#[component]
pub fn AssetDetailView(asset_hub_id: i64) -> impl IntoView {
    let detail = RwSignal::new(None::<AssetDetail>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_asset_detail(asset_hub_id).await {
            Ok(d) => detail.set(Some(d)),
            Err(e) => {
                log::error!("asset detail {} failed: {}", asset_hub_id, e);
                error.set(Some(e));
            }
        }
        loading.set(false);
    });

    view! {
        <ErrorBanner error=error />
        <Show when=move || !loading.get() fallback=|| view! { <div class="loading"><Spinner /></div> }>
            {move || detail.get().map(detail_body)}
        </Show>
    }
}
