use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ram_modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub clock_mhz: i32,
    pub capacity_gb: i32,
    pub ram_type_id: Uuid,
    pub design: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ram_type::Entity",
        from = "Column::RamTypeId",
        to = "super::ram_type::Column::Id"
    )]
    RamType,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::ram_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RamType.def()
    }
}
