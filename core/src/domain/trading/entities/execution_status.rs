use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    pub id: i32,
    pub abbreviation: String,
    pub description: String,
    pub version: i32,
}

impl ExecutionStatus {
    pub fn new(id: i32, abbreviation: String, description: String, version: i32) -> Self {
        Self {
            id,
            abbreviation,
            description,
            version,
        }
    }
}
