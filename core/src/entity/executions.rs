use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "executions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub execution_timestamp: DateTimeWithTimeZone,
    pub execution_status_id: i32,
    pub blotter_id: Option<i32>,
    pub trade_type_id: i32,
    pub trade_order_id: i32,
    pub destination_id: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))")]
    pub quantity_ordered: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))")]
    pub quantity_placed: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))")]
    pub quantity_filled: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))", nullable)]
    pub limit_price: Option<Decimal>,
    pub execution_service_id: Option<i32>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blotters::Entity",
        from = "Column::BlotterId",
        to = "super::blotters::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Blotter,
    #[sea_orm(
        belongs_to = "super::destinations::Entity",
        from = "Column::DestinationId",
        to = "super::destinations::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Destination,
    #[sea_orm(
        belongs_to = "super::execution_statuses::Entity",
        from = "Column::ExecutionStatusId",
        to = "super::execution_statuses::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ExecutionStatus,
    #[sea_orm(
        belongs_to = "super::trade_orders::Entity",
        from = "Column::TradeOrderId",
        to = "super::trade_orders::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TradeOrder,
    #[sea_orm(
        belongs_to = "super::trade_types::Entity",
        from = "Column::TradeTypeId",
        to = "super::trade_types::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TradeType,
}

impl Related<super::blotters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blotter.def()
    }
}

impl Related<super::destinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::execution_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExecutionStatus.def()
    }
}

impl Related<super::trade_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeOrder.def()
    }
}

impl Related<super::trade_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
