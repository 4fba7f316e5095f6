pub mod outcome_card;
pub mod panel;
pub mod state;
pub mod task_item;

pub use panel::OutcomesPanel;
