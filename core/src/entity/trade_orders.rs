use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub portfolio_id: String,
    pub order_type: String,
    pub security_id: String,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))")]
    pub quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))")]
    pub quantity_sent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 8)))", nullable)]
    pub limit_price: Option<Decimal>,
    pub trade_timestamp: DateTimeWithTimeZone,
    pub blotter_id: Option<i32>,
    pub submitted: bool,
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
    #[sea_orm(has_many = "super::executions::Entity")]
    Executions,
}

impl Related<super::blotters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blotter.def()
    }
}

impl Related<super::executions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Executions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
