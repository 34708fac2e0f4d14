//! Applies a validated [`SortSpec`] to a Sea-ORM select.
//!
//! Simple fields order by the entity's own column. Dotted fields order by the
//! related table's column; the relation is LEFT JOINed once per query.

use std::collections::HashSet;

use sea_orm::{
    EntityTrait, IntoSimpleExpr, JoinType, Order, QueryOrder, QuerySelect, RelationDef,
    RelationTrait, Select, sea_query::SimpleExpr,
};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        sorting::{
            entities::{FieldPath, SortDirection, SortField, SortSpec, SortableEntity},
            policies::invalid_sort_field,
        },
    },
    entity::{blotters, destinations, execution_statuses, executions, trade_orders, trade_types},
};

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

struct SortColumn {
    join: Option<(&'static str, RelationDef)>,
    expr: SimpleExpr,
}

impl SortColumn {
    fn own(column: impl IntoSimpleExpr) -> Self {
        Self {
            join: None,
            expr: column.into_simple_expr(),
        }
    }

    fn related(relation: &'static str, def: RelationDef, column: impl IntoSimpleExpr) -> Self {
        Self {
            join: Some((relation, def)),
            expr: column.into_simple_expr(),
        }
    }
}

pub fn apply_trade_order_sort(
    select: Select<trade_orders::Entity>,
    spec: &SortSpec,
) -> Result<Select<trade_orders::Entity>, CoreError> {
    apply_sort(select, spec, SortableEntity::TradeOrder, trade_order_column)
}

pub fn apply_execution_sort(
    select: Select<executions::Entity>,
    spec: &SortSpec,
) -> Result<Select<executions::Entity>, CoreError> {
    apply_sort(select, spec, SortableEntity::Execution, execution_column)
}

fn apply_sort<E, F>(
    mut select: Select<E>,
    spec: &SortSpec,
    entity: SortableEntity,
    resolve: F,
) -> Result<Select<E>, CoreError>
where
    E: EntityTrait,
    F: Fn(&FieldPath) -> Option<SortColumn>,
{
    let columns = spec
        .iter()
        .map(|field| resolve_field(field, entity, &resolve))
        .collect::<Result<Vec<_>, _>>()?;

    let mut joined = HashSet::new();
    for (column, direction) in columns {
        if let Some((relation, def)) = column.join
            && joined.insert(relation)
        {
            select = select.join(JoinType::LeftJoin, def);
        }
        select = select.order_by(column.expr, direction.into());
    }

    Ok(select)
}

fn resolve_field<F>(
    field: &SortField,
    entity: SortableEntity,
    resolve: &F,
) -> Result<(SortColumn, SortDirection), CoreError>
where
    F: Fn(&FieldPath) -> Option<SortColumn>,
{
    resolve(field.path())
        .map(|column| (column, field.direction()))
        .ok_or_else(|| invalid_sort_field(entity, field.name()))
}

fn trade_order_column(path: &FieldPath) -> Option<SortColumn> {
    use trade_orders::{Column, Relation};

    let column = match path {
        FieldPath::Field(name) => match name.as_str() {
            "id" => SortColumn::own(Column::Id),
            "orderId" => SortColumn::own(Column::OrderId),
            "orderType" => SortColumn::own(Column::OrderType),
            "quantity" => SortColumn::own(Column::Quantity),
            "quantitySent" => SortColumn::own(Column::QuantitySent),
            "tradeTimestamp" => SortColumn::own(Column::TradeTimestamp),
            "submitted" => SortColumn::own(Column::Submitted),
            _ => return None,
        },
        FieldPath::Related { relation, field } => match (relation.as_str(), field.as_str()) {
            ("blotter", "abbreviation") => SortColumn::related(
                "blotter",
                Relation::Blotter.def(),
                blotters::Column::Abbreviation,
            ),
            _ => return None,
        },
    };

    Some(column)
}

fn execution_column(path: &FieldPath) -> Option<SortColumn> {
    use executions::{Column, Relation};

    let column = match path {
        FieldPath::Field(name) => match name.as_str() {
            "id" => SortColumn::own(Column::Id),
            "executionTimestamp" => SortColumn::own(Column::ExecutionTimestamp),
            "quantityOrdered" => SortColumn::own(Column::QuantityOrdered),
            "quantityPlaced" => SortColumn::own(Column::QuantityPlaced),
            "quantityFilled" => SortColumn::own(Column::QuantityFilled),
            "tradeOrderId" => SortColumn::own(Column::TradeOrderId),
            _ => return None,
        },
        FieldPath::Related { relation, field } => match (relation.as_str(), field.as_str()) {
            ("executionStatus", "abbreviation") => SortColumn::related(
                "executionStatus",
                Relation::ExecutionStatus.def(),
                execution_statuses::Column::Abbreviation,
            ),
            ("blotter", "abbreviation") => SortColumn::related(
                "blotter",
                Relation::Blotter.def(),
                blotters::Column::Abbreviation,
            ),
            ("tradeType", "abbreviation") => SortColumn::related(
                "tradeType",
                Relation::TradeType.def(),
                trade_types::Column::Abbreviation,
            ),
            ("destination", "abbreviation") => SortColumn::related(
                "destination",
                Relation::Destination.def(),
                destinations::Column::Abbreviation,
            ),
            _ => return None,
        },
    };

    Some(column)
}
