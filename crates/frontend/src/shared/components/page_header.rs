use leptos::prelude::*;

use crate::shared::selection::use_selection;

/// View title with the active seller/trade underneath and an actions slot.
#[component]
pub fn PageHeader(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let selection = use_selection();
    let scope = move || match selection.current() {
        Some(sel) => format!("Seller #{} · Trade #{}", sel.seller_id, sel.trade_id),
        None => "No trade selected".to_string(),
    };

    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <div class="page-header__subtitle">{scope}</div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
