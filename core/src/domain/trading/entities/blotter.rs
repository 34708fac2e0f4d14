use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trading desk book that orders and executions are filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Blotter {
    pub id: i32,
    pub abbreviation: String,
    pub name: String,
    pub version: i32,
}

impl Blotter {
    pub fn new(id: i32, abbreviation: String, name: String, version: i32) -> Self {
        Self {
            id,
            abbreviation,
            name,
            version,
        }
    }
}
