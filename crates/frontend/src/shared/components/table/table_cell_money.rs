use leptos::prelude::*;
use thaw::*;

use super::cell_class::sign_class;
use super::number_format::format_optional_currency;

/// Right-aligned currency cell.
///
/// With `color_by_sign` the cell carries `cell-positive` / `cell-negative`.
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(optional, default = false)] color_by_sign: bool,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let class = move || {
        let mut class = String::new();
        if color_by_sign {
            class.push_str(sign_class(value.get()));
        }
        if bold {
            class.push_str(" text-bold");
        }
        class
    };

    view! {
        <TableCell class="text-right">
            <span class=class>{move || format_optional_currency(value.get())}</span>
        </TableCell>
    }
}
