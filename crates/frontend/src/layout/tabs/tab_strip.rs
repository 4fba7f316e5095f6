use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:tab--active=is_active on:click=on_click>
            <span class="tab__title">{tab.title}</span>
            <button class="tab__close" title="Close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Handles of the opened tabs.
#[component]
pub fn TabStrip(tabs_store: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}
