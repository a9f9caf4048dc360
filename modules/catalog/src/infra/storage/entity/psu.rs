use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "psus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub wattage: i32,
    pub form_factor_id: Uuid,
    pub certificate_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::psu_form_factor::Entity",
        from = "Column::FormFactorId",
        to = "super::psu_form_factor::Column::Id"
    )]
    FormFactor,
    #[sea_orm(
        belongs_to = "super::psu_certificate::Entity",
        from = "Column::CertificateId",
        to = "super::psu_certificate::Column::Id"
    )]
    Certificate,
    #[sea_orm(has_many = "super::psu_cpu_connector::Entity")]
    CpuConnectors,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::psu_cpu_connector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpuConnectors.def()
    }
}
