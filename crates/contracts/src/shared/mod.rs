pub mod lenient;
pub mod metrics;
pub mod money;
pub mod selection;
pub mod tone;
