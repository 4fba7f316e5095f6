//! Seller/trade selection shared by every pool-scoped view.

pub mod api;
pub mod selection_bar;
pub mod state;
pub mod storage;

use contracts::shared::selection::Selection;
use leptos::prelude::*;

pub use selection_bar::SelectionBar;
pub use state::{SelectionState, SelectionTicket};

/// Context service over [`SelectionState`], provided once at the app root.
#[derive(Clone, Copy)]
pub struct SelectionContext {
    state: RwSignal<SelectionState>,
}

impl SelectionContext {
    /// Starts from the persisted selection and keeps persisting changes.
    pub fn restore() -> Self {
        let ctx = Self {
            state: RwSignal::new(storage::load()),
        };
        Effect::new(move |_| {
            let state = ctx.state.get();
            storage::save(&state);
        });
        ctx
    }

    /// Tracked: views re-run their fetches when this changes.
    pub fn current(&self) -> Option<Selection> {
        self.state.with(|s| s.selection())
    }

    pub fn seller_id(&self) -> Option<i64> {
        self.state.with(|s| s.seller_id)
    }

    pub fn trade_id(&self) -> Option<i64> {
        self.state.with(|s| s.trade_id)
    }

    pub fn seller_id_untracked(&self) -> Option<i64> {
        self.state.with_untracked(|s| s.seller_id)
    }

    pub fn set_seller(&self, seller_id: Option<i64>) {
        self.apply(|s| s.set_seller(seller_id));
    }

    pub fn set_trade(&self, trade_id: Option<i64>) {
        self.apply(|s| s.set_trade(trade_id));
    }

    pub fn reset(&self) {
        self.apply(SelectionState::reset);
    }

    pub fn ticket(&self) -> SelectionTicket {
        self.state.with_untracked(|s| s.ticket())
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.state.with_untracked(|s| s.is_current(ticket))
    }

    fn apply(&self, change: impl FnOnce(&mut SelectionState) -> bool) {
        let mut next = self.state.get_untracked();
        if change(&mut next) {
            log::debug!(
                "selection changed: seller={:?} trade={:?}",
                next.seller_id,
                next.trade_id
            );
            self.state.set(next);
        }
    }
}

pub fn use_selection() -> SelectionContext {
    use_context::<SelectionContext>().expect("SelectionContext not provided in app root")
}
