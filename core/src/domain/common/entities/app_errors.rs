use thiserror::Error;

use crate::domain::sorting::entities::SortableEntity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(
        "Invalid sort field '{field}' for {entity}. Valid fields are: {}",
        .valid_fields.join(", ")
    )]
    InvalidSortField {
        field: String,
        entity: SortableEntity,
        valid_fields: Vec<String>,
    },

    #[error("Unknown sortable entity '{0}'")]
    UnknownEntity(String),
}
