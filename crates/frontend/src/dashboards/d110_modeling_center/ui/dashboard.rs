use contracts::dashboards::d110_modeling_center::{ModelingRow, ModelingTotals};
use contracts::domain::a110_am_outcome::OutcomeKind;
use contracts::shared::tone::Tone;
use leptos::prelude::*;
use thaw::*;

use super::super::api;
use super::details::ModelingRowDetails;
use super::state::ModelingGridState;
use crate::domain::a110_am_outcome;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table::{
    format_compact_currency, format_count, format_multiple, format_optional_currency,
    format_optional_number, format_optional_percent, SortableHeaderCell, TableCellMoney,
};
use crate::shared::components::ui::ToneBadge;
use crate::shared::components::{ErrorBanner, PageHeader, StatCard};
use crate::shared::list_utils::{filter_list, sort_list, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::scoped_fetch::ScopedResource;
use crate::shared::selection::use_selection;

#[component]
pub fn ModelingCenterDashboard() -> impl IntoView {
    let selection = use_selection();
    let modal_stack = use_modal_stack();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let rows = ScopedResource::<Vec<ModelingRow>>::new();
    let grid = RwSignal::new(ModelingGridState::default());

    Effect::new(move |_| {
        let _ = selection.current();
        rows.load(selection, "modeling center", api::fetch_modeling_rows);
    });

    let totals = Memo::new(move |_| {
        rows.data
            .with(|r| ModelingTotals::from_rows(r.as_deref().unwrap_or_default()))
    });

    let visible = Memo::new(move |_| {
        let state = grid.get();
        rows.data.with(|r| {
            let mut list = filter_list(r.as_deref().unwrap_or_default(), &state.filter);
            sort_list(&mut list, &state.sort.field, state.sort.ascending);
            list
        })
    });

    let visible_totals = Memo::new(move |_| visible.with(|v| ModelingTotals::from_rows(v)));

    let open_am = Callback::new(move |hub_id: i64| {
        tabs_store.open_tab(
            &a110_am_outcome::tab_key(hub_id),
            &a110_am_outcome::tab_title(hub_id),
        );
    });

    let open_details = move |row: ModelingRow| {
        let title = format!("Asset #{}", row.row_key().unwrap_or_default());
        modal_stack.push(title, move |handle| {
            let on_open_am = Callback::new(move |hub_id: i64| {
                handle.close();
                open_am.run(hub_id);
            });
            view! { <ModelingRowDetails row=row.clone() on_open_am=on_open_am /> }.into_any()
        });
    };

    let on_sort = Callback::new(move |field: &'static str| grid.update(|s| s.sort.toggle(field)));
    let sort = Signal::derive(move || grid.with(|s| s.sort.clone()));

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Modeling Center">
                <SearchInput
                    value=Signal::derive(move || grid.with(|s| s.filter.clone()))
                    on_change=Callback::new(move |v: String| grid.update(|s| s.filter = v))
                />
            </PageHeader>

            <ErrorBanner error=rows.error />

            <div class="stat-grid stat-grid--headline">
                <StatCard
                    label="Modeled Assets"
                    icon_name="home"
                    value=Signal::derive(move || format_count(totals.get().asset_count as u64))
                />
                <StatCard
                    label="Total Bid"
                    icon_name="dollar-sign"
                    value=Signal::derive(move || format_compact_currency(totals.get().total_bid))
                />
                {move || {
                    let net = totals.get().total_net_pl;
                    view! {
                        <StatCard
                            label="Total Net P&L"
                            icon_name="bar-chart"
                            tone=Tone::by_sign(Some(net))
                            value=Signal::derive(move || format_compact_currency(net))
                        />
                    }
                }}
                <StatCard
                    label="Weighted IRR"
                    icon_name="bar-chart"
                    value=Signal::derive(move || {
                        format_optional_percent(totals.get().weighted_irr.map(|v| v * 100.0), 1)
                    })
                />
            </div>

            <div class="outcome-summary">
                {OutcomeKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <div class="outcome-summary__item">
                                <ToneBadge tone=kind.tone()>{kind.label()}</ToneBadge>
                                <span class="outcome-summary__count">
                                    {move || {
                                        let share = totals.get().outcome_share(Some(kind));
                                        format!("{} ({})", share.count, share.percent_label())
                                    }}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !rows.loading.get()
                fallback=|| view! { <div class="loading"><Spinner /></div> }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Asset" field="asset" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Address" field="address" sort=sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Outcome" field="outcome" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Balance" field="current_balance" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Bid" field="bid_price" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Costs" field="total_costs" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Proceeds" field="gross_proceeds" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Net P&L" field="net_pl" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="IRR" field="irr" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="MOIC" field="moic" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Months" field="duration_months" sort=sort on_sort=on_sort align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get().into_iter().enumerate()
                                key=|(idx, row)| (row.row_key(), *idx)
                                children=move |(_, row)| {
                                    let row_for_click = row.clone();
                                    let outcome = row.outcome();
                                    let row_key = row.row_key().map(|k| k.to_string()).unwrap_or_default();
                                    let address_line = row.address_line();
                                    view! {
                                        <TableRow
                                            on:click=move |_| open_details(row_for_click.clone())
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                {row_key}
                                            </TableCell>
                                            <TableCell>{address_line}</TableCell>
                                            <TableCell>
                                                {match outcome {
                                                    Some(k) => view! { <ToneBadge tone=k.tone()>{k.label()}</ToneBadge> }.into_any(),
                                                    None => view! { <span class="text-muted">"—"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCellMoney value=row.current_balance />
                                            <TableCellMoney value=row.bid_price />
                                            <TableCellMoney value=row.total_costs />
                                            <TableCellMoney value=row.gross_proceeds />
                                            <TableCellMoney value=row.net_pl color_by_sign=true bold=true />
                                            <TableCell class="text-right">
                                                {format_optional_percent(row.irr.map(|v| v * 100.0), 1)}
                                            </TableCell>
                                            <TableCell class="text-right">{format_multiple(row.moic)}</TableCell>
                                            <TableCell class="text-right">
                                                {format_optional_number(row.duration_months, 0)}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableRow class="table__totals-row">
                                <TableCell>{move || format!("{} rows", visible.with(|v| v.len()))}</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell>""</TableCell>
                                <TableCell class="text-right">
                                    {move || format_optional_currency(Some(visible_totals.get().total_bid))}
                                </TableCell>
                                <TableCell class="text-right">
                                    {move || format_optional_currency(Some(visible_totals.get().total_costs))}
                                </TableCell>
                                <TableCell>""</TableCell>
                                <TableCellMoney
                                    value=Signal::derive(move || Some(visible_totals.get().total_net_pl))
                                    color_by_sign=true
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
