use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cpus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub cores: i32,
    pub threads: i32,
    pub tdp_watts: i32,
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
    #[sea_orm(has_many = "super::cpu_ram_type::Entity")]
    SupportedRam,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::socket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Socket.def()
    }
}

impl Related<super::cpu_ram_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportedRam.def()
    }
}
