pub mod badge;
pub mod select;

pub use badge::{badge_color, ToneBadge};
pub use select::{parse_id, Select};
