pub mod dto;
pub mod totals;

pub use dto::*;
pub use totals::*;
