use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::trading::entities::{Blotter, Destination, ExecutionStatus, TradeType};

/// A placement of (part of) a trade order at a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: i32,
    pub execution_timestamp: DateTime<Utc>,
    pub execution_status: ExecutionStatus,
    pub blotter: Option<Blotter>,
    pub trade_type: TradeType,
    pub trade_order_id: i32,
    pub destination: Destination,
    pub quantity_ordered: Decimal,
    pub quantity_placed: Decimal,
    pub quantity_filled: Decimal,
    pub limit_price: Option<Decimal>,
    pub execution_service_id: Option<i32>,
    pub version: i32,
}
