pub mod details;
pub mod list;

pub use details::AssetDetailView;
pub use list::AssetGridList;
