//! Workspace tabs: key → title, key → view, and the page wrapper.

pub mod page;
pub mod registry;
pub mod tab_labels;
pub mod tab_strip;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
pub use tab_strip::TabStrip;
