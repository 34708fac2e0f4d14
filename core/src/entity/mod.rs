//! Sea-ORM entity models for the trade service tables

pub mod blotters;
pub mod destinations;
pub mod execution_statuses;
pub mod executions;
pub mod trade_orders;
pub mod trade_types;
