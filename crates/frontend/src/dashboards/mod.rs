pub mod d100_acq_summary;
pub mod d110_modeling_center;

pub use d100_acq_summary::ui::AcqSummaryDashboard;
pub use d110_modeling_center::ui::ModelingCenterDashboard;
