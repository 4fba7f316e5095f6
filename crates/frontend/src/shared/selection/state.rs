use contracts::shared::selection::Selection;
use serde::{Deserialize, Serialize};

/// Seller/trade choice plus a counter bumped on every effective change.
///
/// The counter lets an in-flight response find out that the selection it was
/// issued for is gone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub seller_id: Option<i64>,
    pub trade_id: Option<i64>,
    #[serde(skip)]
    pub epoch: u64,
}

/// Snapshot taken when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    pub epoch: u64,
    pub selection: Option<Selection>,
}

impl SelectionState {
    pub fn selection(&self) -> Option<Selection> {
        Selection::from_parts(self.seller_id, self.trade_id)
    }

    /// A new seller always drops the trade. Returns whether anything changed.
    pub fn set_seller(&mut self, seller_id: Option<i64>) -> bool {
        if self.seller_id == seller_id {
            return false;
        }
        self.seller_id = seller_id;
        self.trade_id = None;
        self.epoch += 1;
        true
    }

    /// Ignored while no seller is chosen.
    pub fn set_trade(&mut self, trade_id: Option<i64>) -> bool {
        if self.seller_id.is_none() || self.trade_id == trade_id {
            return false;
        }
        self.trade_id = trade_id;
        self.epoch += 1;
        true
    }

    pub fn reset(&mut self) -> bool {
        if self.seller_id.is_none() && self.trade_id.is_none() {
            return false;
        }
        self.seller_id = None;
        self.trade_id = None;
        self.epoch += 1;
        true
    }

    pub fn ticket(&self) -> SelectionTicket {
        SelectionTicket {
            epoch: self.epoch,
            selection: self.selection(),
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.epoch == ticket.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_change_clears_trade() {
        let mut state = SelectionState::default();
        assert!(state.set_seller(Some(5)));
        assert!(state.set_trade(Some(12)));
        assert_eq!(
            state.selection(),
            Some(Selection {
                seller_id: 5,
                trade_id: 12
            })
        );

        assert!(state.set_seller(Some(6)));
        assert_eq!(state.trade_id, None);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn trade_without_seller_is_ignored() {
        let mut state = SelectionState::default();
        assert!(!state.set_trade(Some(12)));
        assert_eq!(state.trade_id, None);
        assert_eq!(state.epoch, 0);
    }

    #[test]
    fn same_value_does_not_bump_epoch() {
        let mut state = SelectionState::default();
        state.set_seller(Some(5));
        let epoch = state.epoch;
        assert!(!state.set_seller(Some(5)));
        assert_eq!(state.epoch, epoch);
    }

    #[test]
    fn ticket_goes_stale_on_reselection() {
        let mut state = SelectionState::default();
        state.set_seller(Some(5));
        state.set_trade(Some(12));
        let ticket = state.ticket();
        assert!(state.is_current(&ticket));

        state.set_trade(Some(13));
        assert!(!state.is_current(&ticket));

        state.reset();
        assert_eq!(state.selection(), None);
        assert!(!state.reset());
    }

    #[test]
    fn epoch_is_not_persisted() {
        let mut state = SelectionState::default();
        state.set_seller(Some(5));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"seller_id":5,"trade_id":null}"#);
        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.epoch, 0);
        assert_eq!(back.seller_id, Some(5));
    }
}
