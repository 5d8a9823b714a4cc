pub mod order;
pub mod table;

pub use order::sort_descending;
pub use table::{HistoryTable, TableRow};
