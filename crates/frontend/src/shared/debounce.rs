use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Trailing-edge debounce over `window.setTimeout`.
///
/// Each `schedule` cancels the previous pending call, so only the last one
/// inside the delay window runs.
#[derive(Clone, Copy)]
pub struct Debouncer {
    handle: StoredValue<Option<i32>>,
    delay_ms: i32,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            handle: StoredValue::new(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(id) => self.handle.set_value(Some(id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
            self.handle.set_value(None);
        }
    }
}
