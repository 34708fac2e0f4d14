use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Entities whose listings accept a `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SortableEntity {
    TradeOrder,
    Execution,
}

impl SortableEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortableEntity::TradeOrder => "TradeOrder",
            SortableEntity::Execution => "Execution",
        }
    }
}

impl fmt::Display for SortableEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortableEntity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TradeOrder" => Ok(SortableEntity::TradeOrder),
            "Execution" => Ok(SortableEntity::Execution),
            _ => Err(CoreError::UnknownEntity(s.to_string())),
        }
    }
}

/// Target of a sort key: a field of the entity itself, or a field of a related
/// entity reached through a named relation (`blotter.abbreviation`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Field(String),
    Related { relation: String, field: String },
}

impl FieldPath {
    /// Splits on the first `.` only; anything after it stays in `field`.
    pub fn parse(name: &str) -> Self {
        match name.split_once('.') {
            Some((relation, field)) => FieldPath::Related {
                relation: relation.to_string(),
                field: field.to_string(),
            },
            None => FieldPath::Field(name.to_string()),
        }
    }

    pub fn relation(&self) -> Option<&str> {
        match self {
            FieldPath::Field(_) => None,
            FieldPath::Related { relation, .. } => Some(relation),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(name) => f.write_str(name),
            FieldPath::Related { relation, field } => write!(f, "{relation}.{field}"),
        }
    }
}

/// A single sort key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortField {
    path: FieldPath,
    direction: SortDirection,
}

impl SortField {
    pub fn new(name: &str, direction: SortDirection) -> Self {
        Self {
            path: FieldPath::parse(name),
            direction,
        }
    }

    pub fn asc(name: &str) -> Self {
        Self::new(name, SortDirection::Asc)
    }

    pub fn desc(name: &str) -> Self {
        Self::new(name, SortDirection::Desc)
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Field name as written in the sort parameter, dotted for related fields
    pub fn name(&self) -> String {
        self.path.to_string()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_related(&self) -> bool {
        matches!(self.path, FieldPath::Related { .. })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SortDirection::Desc {
            f.write_str("-")?;
        }
        write!(f, "{}", self.path)
    }
}

/// Ordered sort keys, primary key first. Empty means unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, field: SortField) {
        self.fields.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.fields.iter()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Serializes as the canonical sort string, e.g. `"id,-blotter.abbreviation"`
impl Serialize for SortSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl FromIterator<SortField> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SortSpec {
    type Item = SortField;
    type IntoIter = std::vec::IntoIter<SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortField;
    type IntoIter = std::slice::Iter<'a, SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
