pub mod entities;
pub mod policies;
pub mod services;

pub use entities::{FieldPath, SortDirection, SortField, SortSpec, SortableEntity};
pub use policies::{is_sortable, valid_sort_fields};
pub use services::{parse_sort, validate_sort};
