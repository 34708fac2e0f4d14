use crate::{
    domain::trading::entities::{
        Blotter, Destination, Execution, ExecutionStatus, TradeOrder, TradeType,
    },
    entity::{blotters, destinations, execution_statuses, executions, trade_orders, trade_types},
};

impl From<blotters::Model> for Blotter {
    fn from(model: blotters::Model) -> Self {
        Blotter::new(model.id, model.abbreviation, model.name, model.version)
    }
}

impl From<destinations::Model> for Destination {
    fn from(model: destinations::Model) -> Self {
        Destination::new(model.id, model.abbreviation, model.description, model.version)
    }
}

impl From<execution_statuses::Model> for ExecutionStatus {
    fn from(model: execution_statuses::Model) -> Self {
        ExecutionStatus::new(model.id, model.abbreviation, model.description, model.version)
    }
}

impl From<trade_types::Model> for TradeType {
    fn from(model: trade_types::Model) -> Self {
        TradeType::new(model.id, model.abbreviation, model.description, model.version)
    }
}

/// Row shape of `trade_orders::Entity::find().find_also_related(blotters::Entity)`
impl From<(trade_orders::Model, Option<blotters::Model>)> for TradeOrder {
    fn from((model, blotter): (trade_orders::Model, Option<blotters::Model>)) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            portfolio_id: model.portfolio_id,
            order_type: model.order_type,
            security_id: model.security_id,
            quantity: model.quantity,
            quantity_sent: model.quantity_sent,
            limit_price: model.limit_price,
            trade_timestamp: model.trade_timestamp.to_utc(),
            blotter: blotter.map(Blotter::from),
            submitted: model.submitted,
            version: model.version,
        }
    }
}

/// Related rows an execution references
#[derive(Debug, Clone)]
pub struct ExecutionRelations {
    pub execution_status: execution_statuses::Model,
    pub blotter: Option<blotters::Model>,
    pub trade_type: trade_types::Model,
    pub destination: destinations::Model,
}

pub fn map_execution(model: executions::Model, relations: ExecutionRelations) -> Execution {
    Execution {
        id: model.id,
        execution_timestamp: model.execution_timestamp.to_utc(),
        execution_status: relations.execution_status.into(),
        blotter: relations.blotter.map(Blotter::from),
        trade_type: relations.trade_type.into(),
        trade_order_id: model.trade_order_id,
        destination: relations.destination.into(),
        quantity_ordered: model.quantity_ordered,
        quantity_placed: model.quantity_placed,
        quantity_filled: model.quantity_filled,
        limit_price: model.limit_price,
        execution_service_id: model.execution_service_id,
        version: model.version,
    }
}
