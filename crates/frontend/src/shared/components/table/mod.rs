pub mod cell_class;
pub mod editable_cell;
pub mod number_format;
pub mod sortable_header_cell;
pub mod table_cell_money;

pub use cell_class::{sign_class, tone_class};
pub use editable_cell::TableCellEditableMoney;
pub use number_format::*;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_money::TableCellMoney;
