//! Fetches keyed by the current seller/trade selection.
//!
//! Every load captures a [`SelectionTicket`](super::selection::SelectionTicket);
//! a response that comes back after the selection moved on is dropped instead
//! of overwriting the newer state.

use std::future::Future;

use contracts::shared::selection::Selection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::selection::SelectionContext;

#[derive(Debug, PartialEq)]
pub enum ScopedUpdate<T> {
    Set(T),
    Failed(String),
    Discard,
}

pub fn resolve_scoped<T>(still_current: bool, result: Result<T, String>) -> ScopedUpdate<T> {
    if !still_current {
        return ScopedUpdate::Discard;
    }
    match result {
        Ok(value) => ScopedUpdate::Set(value),
        Err(e) => ScopedUpdate::Failed(e),
    }
}

/// Loading bookkeeping of one scoped loader.
///
/// Every start takes a new sequence number and only the newest one may settle
/// the loading flag, so a stale response never leaves a spinner behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGate {
    latest: u64,
    loading: bool,
}

impl LoadGate {
    /// Starts a load for `selection`. Without a complete selection nothing is
    /// requested, the gate goes idle and `None` comes back.
    pub fn begin(&mut self, selection: Option<Selection>) -> Option<(u64, Selection)> {
        self.latest += 1;
        self.loading = selection.is_some();
        selection.map(|s| (self.latest, s))
    }

    /// The data is already at hand; whatever is in flight no longer counts.
    pub fn skip(&mut self) {
        self.latest += 1;
        self.loading = false;
    }

    pub fn finish(&mut self, seq: u64) {
        if seq == self.latest {
            self.loading = false;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Data, loading flag and last error of one selection-scoped endpoint.
pub struct ScopedResource<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: Signal<bool>,
    pub error: RwSignal<Option<String>>,
    gate: RwSignal<LoadGate>,
}

impl<T: 'static> Clone for ScopedResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ScopedResource<T> {}

impl<T: Send + Sync + 'static> ScopedResource<T> {
    pub fn new() -> Self {
        let gate = RwSignal::new(LoadGate::default());
        Self {
            data: RwSignal::new(None),
            loading: Signal::derive(move || gate.with(LoadGate::is_loading)),
            error: RwSignal::new(None),
            gate,
        }
    }

    /// Without a complete selection nothing is requested and the state is
    /// cleared. Failures leave `data` empty and fill `error`; no retry.
    pub fn load<F, Fut>(&self, selection: SelectionContext, label: &'static str, fetch: F)
    where
        F: FnOnce(Selection) -> Fut + 'static,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        let ticket = selection.ticket();
        self.data.set(None);
        self.error.set(None);
        let Some((seq, scope)) = self.gate.try_update(|g| g.begin(ticket.selection)).flatten()
        else {
            return;
        };

        let this = *self;
        spawn_local(async move {
            let result = fetch(scope).await;
            match resolve_scoped(selection.is_current(&ticket), result) {
                ScopedUpdate::Set(value) => this.data.set(Some(value)),
                ScopedUpdate::Failed(e) => {
                    log::error!("{} fetch failed for {}: {}", label, scope.path(), e);
                    this.data.set(None);
                    this.error.set(Some(e));
                }
                ScopedUpdate::Discard => {
                    log::debug!("dropping stale {} response for {}", label, scope.path());
                }
            }
            this.gate.update(|g| g.finish(seq));
        });
    }
}

impl<T: Send + Sync + 'static> Default for ScopedResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_is_discarded_even_on_success() {
        assert_eq!(resolve_scoped(false, Ok(1)), ScopedUpdate::Discard);
        assert_eq!(
            resolve_scoped::<u8>(false, Err("boom".into())),
            ScopedUpdate::Discard
        );
    }

    #[test]
    fn current_response_is_applied() {
        assert_eq!(resolve_scoped(true, Ok(7)), ScopedUpdate::Set(7));
        assert_eq!(
            resolve_scoped::<u8>(true, Err("HTTP error: 500".into())),
            ScopedUpdate::Failed("HTTP error: 500".into())
        );
    }

    fn sel(trade_id: i64) -> Selection {
        Selection {
            seller_id: 5,
            trade_id,
        }
    }

    #[test]
    fn missing_selection_requests_nothing_and_goes_idle() {
        let mut gate = LoadGate::default();
        assert!(gate.begin(Some(sel(1))).is_some());
        assert!(gate.is_loading());

        assert_eq!(gate.begin(None), None);
        assert!(!gate.is_loading());
    }

    #[test]
    fn only_newest_load_settles_loading() {
        let mut gate = LoadGate::default();
        let (first, _) = gate.begin(Some(sel(1))).unwrap();
        let (second, scope) = gate.begin(Some(sel(2))).unwrap();
        assert_eq!(scope, sel(2));

        gate.finish(first);
        assert!(gate.is_loading());
        gate.finish(second);
        assert!(!gate.is_loading());
    }

    #[test]
    fn cache_hit_after_switch_back_is_not_left_loading() {
        let mut gate = LoadGate::default();
        let (a, _) = gate.begin(Some(sel(1))).unwrap();
        gate.finish(a);
        // Switch to trade 2, then back to the cached trade 1 before 2 answers.
        let (b, _) = gate.begin(Some(sel(2))).unwrap();
        gate.skip();
        assert!(!gate.is_loading());
        gate.finish(b);
        assert!(!gate.is_loading());
    }
}
