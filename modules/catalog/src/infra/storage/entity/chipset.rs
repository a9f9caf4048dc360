use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chipsets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::socket::Entity",
        from = "Column::SocketId",
        to = "super::socket::Column::Id"
    )]
    Socket,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::socket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Socket.def()
    }
}
