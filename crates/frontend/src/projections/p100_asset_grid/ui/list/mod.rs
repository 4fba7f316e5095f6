pub mod state;

use contracts::domain::a100_valuation::ValuationField;
use contracts::projections::p100_asset_grid::{AssetGridTotals, AssetRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, GridView};
use super::details::AssetDetailView;
use crate::domain::a100_valuation::api as valuation_api;
use crate::domain::a110_am_outcome;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p100_asset_grid::use_asset_rows;
use crate::shared::components::table::{
    format_optional_number, format_optional_percent, SortableHeaderCell, TableCellEditableMoney,
    TableCellMoney,
};
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{total_pages, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::alert;
use crate::shared::reconcile::{reconcile_delay, write_then_reconcile};
use crate::shared::selection::use_selection;

/// Asset grid of the selected trade with inline-editable internal valuations.
#[component]
pub fn AssetGridList() -> impl IntoView {
    let selection = use_selection();
    let store = use_asset_rows();
    let modal_stack = use_modal_stack();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let grid = create_state();

    Effect::new(move |_| {
        let _ = selection.current();
        store.ensure_loaded(selection);
    });

    let all_rows = Memo::new(move |_| match selection.current() {
        Some(sel) => store.rows(sel),
        None => Vec::new(),
    });
    let view_model: Memo<GridView> = Memo::new(move |_| {
        let rows = all_rows.get();
        grid.with(|s| s.view(&rows))
    });
    let totals = Memo::new(move |_| view_model.with(|v| AssetGridTotals::from_rows(&v.filtered)));

    let refresh = move || {
        spawn_local(async move {
            store.invalidate();
            if let Err(e) = store.refetch(selection).await {
                log::error!("asset grid refresh failed: {}", e);
            }
        });
    };

    let save_valuation = move |hub_id: i64, field: ValuationField, value: f64| {
        grid.update(|s| s.start_saving(hub_id, field));
        log::debug!("saving {} = {} for asset {}", field.label(), value, hub_id);
        spawn_local(async move {
            let out = write_then_reconcile(
                valuation_api::put_internal_valuation(hub_id, field, value),
                reconcile_delay,
                || async move {
                    store.invalidate();
                    store.refetch(selection).await
                },
            )
            .await;
            if let Err(e) = &out.write {
                alert(&format!("Failed to save {} value: {}", field.label(), e));
            }
            if let Err(e) = &out.refreshed {
                log::error!("asset grid refetch after save failed: {}", e);
            }
            grid.update(|s| s.finish_saving(hub_id, field));
        });
    };

    let open_details = move |hub_id: i64| {
        modal_stack.push_sized(format!("Asset #{}", hub_id), Some("900px".to_string()), move |_| {
            view! { <AssetDetailView asset_hub_id=hub_id /> }.into_any()
        });
    };

    let open_am = move |hub_id: i64| {
        tabs_store.open_tab(
            &a110_am_outcome::tab_key(hub_id),
            &a110_am_outcome::tab_title(hub_id),
        );
    };

    let on_sort = Callback::new(move |field: &'static str| grid.update(|s| s.sort.toggle(field)));
    let sort = Signal::derive(move || grid.with(|s| s.sort.clone()));

    let editable_cell = move |row: &AssetRow, field: ValuationField| {
        let value = match field {
            ValuationField::AsIs => row.internal_initial_uw_asis_value,
            ValuationField::Arv => row.internal_initial_uw_arv_value,
        };
        match row.asset_hub_id {
            Some(hub_id) => view! {
                <TableCellEditableMoney
                    value=value
                    saving=Signal::derive(move || grid.with(|s| s.is_saving(hub_id, field)))
                    on_commit=Callback::new(move |amount: f64| save_valuation(hub_id, field, amount))
                />
            }
            .into_any(),
            None => view! { <TableCellMoney value=value /> }.into_any(),
        }
    };

    view! {
        <div class="page page--list">
            <PageHeader title="Asset Grid">
                <SearchInput
                    value=Signal::derive(move || grid.with(|s| s.filter.clone()))
                    on_change=Callback::new(move |v: String| grid.update(|s| s.set_filter(v)))
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || selection.current().is_none() || store.loading.get())
                    on_click=move |_| refresh()
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <ErrorBanner error=store.error />

            <Show
                when=move || selection.current().is_some()
                fallback=|| view! { <div class="empty-state">"Select a seller and trade to load assets."</div> }
            >
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <span class="list-summary">
                        {move || format!("{} of {} assets", view_model.with(|v| v.filtered.len()), all_rows.with(|r| r.len()))}
                    </span>
                    <PaginationControls
                        current_page=Signal::derive(move || view_model.with(|v| v.page))
                        total_pages=Signal::derive(move || {
                            total_pages(view_model.with(|v| v.filtered.len()), grid.with(|s| s.page_size))
                        })
                        total_count=Signal::derive(move || view_model.with(|v| v.filtered.len()))
                        page_size=Signal::derive(move || grid.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| grid.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| grid.update(|s| s.set_page_size(size)))
                    />
                </Flex>

                <div class="table-wrapper">
                    <Show when=move || store.loading.get()>
                        <div class="table-overlay"><Spinner /></div>
                    </Show>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Asset" field="asset" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Loan ID" field="loan_id" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Address" field="address" sort=sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="State" field="state" sort=sort on_sort=on_sort min_width=60.0 />
                                <SortableHeaderCell label="Status" field="asset_status" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Balance" field="current_balance" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Total Debt" field="total_debt" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Mo. DLQ" field="months_dlq" sort=sort on_sort=on_sort align="right" min_width=70.0 />
                                <SortableHeaderCell label="Seller As-Is" field="seller_asis_value" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Broker As-Is" field="broker_asis_value" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Internal UW As-Is" field="internal_asis" sort=sort on_sort=on_sort align="right" min_width=130.0 />
                                <SortableHeaderCell label="Internal UW ARV" field="internal_arv" sort=sort on_sort=on_sort align="right" min_width=130.0 />
                                <SortableHeaderCell label="LTV" field="ltv" sort=sort on_sort=on_sort align="right" min_width=70.0 />
                                <SortableHeaderCell label="Next Due" field="next_due_date" sort=sort on_sort=on_sort />
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || view_model.with(|v| v.page_rows.clone()).into_iter().enumerate()
                                key=|(idx, row)| (row.row_key(), *idx)
                                children=move |(_, row)| {
                                    let hub_id = row.asset_hub_id;
                                    let row_key = row.row_key().map(|k| k.to_string()).unwrap_or_default();
                                    let address_line = row.address_line();
                                    let ltv_pct = row.ltv_pct();
                                    let seller_loan_id = row.seller_loan_id.clone().unwrap_or_default();
                                    let state = row.state.clone().unwrap_or_default();
                                    let asset_status = row.asset_status.clone().unwrap_or_default();
                                    let next_due_date = format_optional_date(row.next_due_date.as_deref());
                                    view! {
                                        <TableRow
                                            on:click=move |_| {
                                                if let Some(id) = hub_id {
                                                    open_details(id);
                                                }
                                            }
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                {row_key}
                                            </TableCell>
                                            <TableCell>{seller_loan_id}</TableCell>
                                            <TableCell>{address_line}</TableCell>
                                            <TableCell>{state}</TableCell>
                                            <TableCell>{asset_status}</TableCell>
                                            <TableCellMoney value=row.current_balance />
                                            <TableCellMoney value=row.total_debt />
                                            <TableCell class="text-right">
                                                {format_optional_number(row.months_dlq, 0)}
                                            </TableCell>
                                            <TableCellMoney value=row.seller_asis_value />
                                            <TableCellMoney value=row.broker_asis_value />
                                            {editable_cell(&row, ValuationField::AsIs)}
                                            {editable_cell(&row, ValuationField::Arv)}
                                            <TableCell class="text-right">
                                                {format_optional_percent(ltv_pct, 1)}
                                            </TableCell>
                                            <TableCell>{next_due_date}</TableCell>
                                            <TableCell>
                                                {hub_id.map(|id| view! {
                                                    <button
                                                        class="icon-button"
                                                        title="Asset management"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            open_am(id);
                                                        }
                                                    >
                                                        {icon("tasks")}
                                                    </button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableRow class="table__totals-row">
                                <TableCell>{move || format!("{} rows", totals.get().rows)}</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(totals.get().current_balance)) bold=true />
                                <TableCellMoney value=Signal::derive(move || Some(totals.get().total_debt)) bold=true />
                                <TableCell>""</TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(totals.get().seller_asis_value)) bold=true />
                                <TableCell>""</TableCell>
                                <TableCellMoney
                                    value=Signal::derive(move || Some(totals.get().internal_initial_uw_asis_value))
                                    bold=true
                                />
                                <TableCellMoney
                                    value=Signal::derive(move || Some(totals.get().internal_initial_uw_arv_value))
                                    bold=true
                                />
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                            </TableRow>
                        </TableBody>
                    </Table>
                </div>
            </Show>
        </div>
    }
}
