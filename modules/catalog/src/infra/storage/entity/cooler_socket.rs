//! Owned join rows between a cooler and the sockets it can mount on.
//! No payload beyond the two foreign keys.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cooler_sockets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cooler_id: Uuid,
    pub socket_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cooler::Entity",
        from = "Column::CoolerId",
        to = "super::cooler::Column::Id"
    )]
    Cooler,
    #[sea_orm(
        belongs_to = "super::socket::Entity",
        from = "Column::SocketId",
        to = "super::socket::Column::Id"
    )]
    Socket,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::cooler::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cooler.def()
    }
}
