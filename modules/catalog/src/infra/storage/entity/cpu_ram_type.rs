//! Owned join rows between a CPU and the RAM types it supports, carrying the
//! maximum supported memory clock as payload.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cpu_ram_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cpu_id: Uuid,
    pub ram_type_id: Uuid,
    pub max_clock_mhz: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpu::Entity",
        from = "Column::CpuId",
        to = "super::cpu::Column::Id"
    )]
    Cpu,
    #[sea_orm(
        belongs_to = "super::ram_type::Entity",
        from = "Column::RamTypeId",
        to = "super::ram_type::Column::Id"
    )]
    RamType,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::cpu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cpu.def()
    }
}

impl Related<super::ram_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RamType.def()
    }
}
