//! Owned join rows for the self-referential compatible set of a CPU power
//! connector. `connector_id` is the owner, `compatible_id` the referenced
//! connector.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cpu_power_connector_compat")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub connector_id: Uuid,
    pub compatible_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpu_power_connector::Entity",
        from = "Column::ConnectorId",
        to = "super::cpu_power_connector::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::cpu_power_connector::Entity",
        from = "Column::CompatibleId",
        to = "super::cpu_power_connector::Column::Id"
    )]
    Compatible,
}

impl ActiveModelBehavior for ActiveModel {}
