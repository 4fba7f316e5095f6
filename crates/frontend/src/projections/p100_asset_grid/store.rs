use contracts::projections::p100_asset_grid::AssetRow;
use contracts::shared::selection::Selection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::row_cache::RowCache;
use crate::shared::scoped_fetch::{resolve_scoped, LoadGate, ScopedUpdate};
use crate::shared::selection::SelectionContext;

/// Asset rows of the current selection, shared by every view that shows them.
#[derive(Clone, Copy)]
pub struct AssetRowStore {
    cache: RwSignal<RowCache<AssetRow>>,
    gate: RwSignal<LoadGate>,
    pub loading: Signal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AssetRowStore {
    pub fn new() -> Self {
        let gate = RwSignal::new(LoadGate::default());
        Self {
            cache: RwSignal::new(RowCache::default()),
            gate,
            loading: Signal::derive(move || gate.with(LoadGate::is_loading)),
            error: RwSignal::new(None),
        }
    }

    /// Tracked. Empty until rows for `selection` are cached.
    pub fn rows(&self, selection: Selection) -> Vec<AssetRow> {
        self.cache
            .with(|c| c.get(selection).map(<[AssetRow]>::to_vec))
            .unwrap_or_default()
    }

    /// Fetches only on a cache miss.
    pub fn ensure_loaded(&self, ctx: SelectionContext) {
        let Some(selection) = ctx.ticket().selection else {
            self.gate.update(LoadGate::skip);
            return;
        };
        if self.cache.with_untracked(|c| c.get(selection).is_some()) {
            self.gate.update(LoadGate::skip);
            return;
        }
        let this = *self;
        spawn_local(async move {
            if let Err(e) = this.refetch(ctx).await {
                log::debug!("asset grid load for {} left empty: {}", selection.path(), e);
            }
        });
    }

    pub fn invalidate(&self) {
        self.cache.update(RowCache::invalidate);
    }

    /// Unconditional fetch for the current selection. A response that arrives
    /// after the selection changed is dropped and reported as `Ok`.
    pub async fn refetch(&self, ctx: SelectionContext) -> Result<(), String> {
        let ticket = ctx.ticket();
        self.error.set(None);
        let Some((seq, selection)) = self.gate.try_update(|g| g.begin(ticket.selection)).flatten()
        else {
            self.invalidate();
            return Ok(());
        };

        let result = api::fetch_asset_rows(selection).await;
        let outcome = match resolve_scoped(ctx.is_current(&ticket), result) {
            ScopedUpdate::Set(rows) => {
                log::debug!("asset grid: {} rows for {}", rows.len(), selection.path());
                self.cache.update(|c| c.store(selection, rows));
                Ok(())
            }
            ScopedUpdate::Failed(e) => {
                log::error!("asset grid fetch failed for {}: {}", selection.path(), e);
                self.invalidate();
                self.error.set(Some(e.clone()));
                Err(e)
            }
            ScopedUpdate::Discard => {
                log::debug!("dropping stale asset rows for {}", selection.path());
                Ok(())
            }
        };
        self.gate.update(|g| g.finish(seq));
        outcome
    }
}

impl Default for AssetRowStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_asset_rows() -> AssetRowStore {
    use_context::<AssetRowStore>().expect("AssetRowStore not provided in app root")
}
