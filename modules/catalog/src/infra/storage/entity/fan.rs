use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub size_id: Uuid,
    pub max_rpm: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fan_size::Entity",
        from = "Column::SizeId",
        to = "super::fan_size::Column::Id"
    )]
    Size,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::fan_size::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Size.def()
    }
}
