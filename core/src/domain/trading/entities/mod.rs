pub mod blotter;
pub mod destination;
pub mod execution;
pub mod execution_status;
pub mod trade_order;
pub mod trade_type;

pub use blotter::*;
pub use destination::*;
pub use execution::*;
pub use execution_status::*;
pub use trade_order::*;
pub use trade_type::*;
