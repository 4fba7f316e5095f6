use leptos::prelude::*;

/// Inline error line; renders nothing while `error` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|msg| {
            view! { <div class="alert alert--error" role="alert">{msg}</div> }
        })
    }
}
