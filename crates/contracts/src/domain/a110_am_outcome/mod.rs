pub mod aggregate;
pub mod config;
pub mod kind;

pub use aggregate::*;
pub use config::*;
pub use kind::*;
