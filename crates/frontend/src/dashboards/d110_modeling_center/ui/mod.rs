pub mod dashboard;
pub mod details;
pub mod state;

pub use dashboard::ModelingCenterDashboard;
