use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::projections::p100_asset_grid::AssetRowStore;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::selection::SelectionContext;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once: opens the tab named in ?active= and mirrors the active tab back.
    tabs_store.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(SelectionContext::restore());
    // Asset rows are shared by the grid and the drill-downs.
    provide_context(AssetRowStore::new());
    provide_context(ModalStackService::new());

    view! {
        <MainLayout />
        <ModalHost />
    }
}
