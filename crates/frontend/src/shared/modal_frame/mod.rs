use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay plus a positioned surface with a title bar.
///
/// The close button and an overlay click both call `on_close`. The overlay
/// only closes when the press and the release both land on the overlay, so a
/// text selection dragged out of the surface keeps the modal open.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] z_index: Option<i32>,
    #[prop(optional)] width: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let width = width.unwrap_or_else(|| "720px".to_string());
    let pressed_on_overlay = RwSignal::new(false);

    let on_self = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let close_next_tick = move || {
        // The overlay must not disappear while its own click is still dispatching.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| pressed_on_overlay.set(on_self(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && on_self(&ev);
                pressed_on_overlay.set(false);
                if close {
                    close_next_tick();
                }
            }
        >
            <div
                class="modal"
                style=format!("position: relative; width: {width}; max-width: 95vw;")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal__header">
                    <span class="modal__title">{title}</span>
                    <button
                        class="modal__close"
                        title="Close"
                        on:click=move |_| close_next_tick()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
