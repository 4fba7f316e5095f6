pub mod a100_valuation;
pub mod a110_am_outcome;
