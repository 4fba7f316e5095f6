pub mod cards;
pub mod dto;

pub use cards::*;
pub use dto::*;
