use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::{TabPage, TabStrip};
use leptos::prelude::*;

/// Tab strip plus the content of every opened tab.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <TabStrip tabs_store=tabs_store />
            <div class="tab-content">
                <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                    <div class="tab-content__empty">"Pick a view from the sidebar"</div>
                </Show>
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
