//! Last selection kept in `localStorage` across reloads.

use super::state::SelectionState;

const STORAGE_KEY: &str = "acq_selection";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load() -> SelectionState {
    local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(state: &SelectionState) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(state) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &raw) {
                log::warn!("Failed to persist selection: {:?}", e);
            }
        }
        Err(e) => log::warn!("Failed to serialize selection: {}", e),
    }
}
