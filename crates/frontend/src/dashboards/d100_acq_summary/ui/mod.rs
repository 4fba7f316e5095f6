pub mod dashboard;

pub use dashboard::AcqSummaryDashboard;
