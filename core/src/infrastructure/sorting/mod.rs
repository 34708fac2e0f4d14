pub mod order_by;

pub use order_by::{apply_execution_sort, apply_trade_order_sort};
