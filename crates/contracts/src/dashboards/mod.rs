pub mod d100_acq_summary;
pub mod d110_modeling_center;
