use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::trading::entities::Blotter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeOrder {
    pub id: i32,
    pub order_id: i32,
    pub portfolio_id: String,
    pub order_type: String, // 'BUY' | 'SELL' | 'SHORT' | ...
    pub security_id: String,
    pub quantity: Decimal,
    pub quantity_sent: Decimal,
    pub limit_price: Option<Decimal>,
    pub trade_timestamp: DateTime<Utc>,
    pub blotter: Option<Blotter>,
    pub submitted: bool,
    pub version: i32,
}
