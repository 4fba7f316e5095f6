pub mod confirm_dialog;
pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use confirm_dialog::confirm;
pub use error_banner::ErrorBanner;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{MetricStatCard, StatCard};
