use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::shared::modal_frame::ModalFrame;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    width: Option<String>,
    builder: ModalBuilder,
}

/// Lets a modal's content close its own frame.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals: drill-downs and confirmations.
///
/// Escape closes only the topmost entry.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn push<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_sized(title, None, builder)
    }

    pub fn push_sized<F>(
        &self,
        title: impl Into<String>,
        width: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let entry = ModalEntry {
            id,
            title: title.into(),
            width,
            builder: Arc::new(builder),
        };
        self.stack.update(|s| s.push(entry));
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Removes the entry on the next tick, after the triggering event finished dispatching.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    pub fn pop_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| {
                s.pop();
            });
        });
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided in app root")
}

/// Renders the modal stack. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if key_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_deferred();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    // Lives as long as the app.
    on_keydown.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let body = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            z_index=1000 + idx as i32
                            width=entry.width.clone().unwrap_or_else(|| "720px".to_string())
                            on_close=Callback::new(move |_| svc.close_deferred(id))
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
