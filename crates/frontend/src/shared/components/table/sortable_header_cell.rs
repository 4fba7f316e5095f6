use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::SortState;

/// Header cell that toggles the grid's sort column on click.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)] min_width: f64,
    #[prop(optional, default = "left")] align: &'static str,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class=header_class on:click=move |_| on_sort.run(field)>
                {label}
                <span class="table__sort-indicator">
                    {move || sort.with(|s| s.indicator(field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
