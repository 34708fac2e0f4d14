use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of trade, e.g. buy or sell short
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeType {
    pub id: i32,
    pub abbreviation: String,
    pub description: String,
    pub version: i32,
}

impl TradeType {
    pub fn new(id: i32, abbreviation: String, description: String, version: i32) -> Self {
        Self {
            id,
            abbreviation,
            description,
            version,
        }
    }
}
