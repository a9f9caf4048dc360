//! Owned join rows between a PSU and CPU power connectors, carrying the
//! provided connector count as payload.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "psu_cpu_connectors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub psu_id: Uuid,
    pub connector_id: Uuid,
    pub count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::psu::Entity",
        from = "Column::PsuId",
        to = "super::psu::Column::Id"
    )]
    Psu,
    #[sea_orm(
        belongs_to = "super::cpu_power_connector::Entity",
        from = "Column::ConnectorId",
        to = "super::cpu_power_connector::Column::Id"
    )]
    Connector,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::psu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Psu.def()
    }
}
