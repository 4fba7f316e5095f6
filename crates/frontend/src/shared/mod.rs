pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod reconcile;
pub mod row_cache;
pub mod scoped_fetch;
pub mod selection;
