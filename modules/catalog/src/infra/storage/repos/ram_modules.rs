use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::model::{RamModule, RamModuleSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{RamModulesRepository, RepoResult};
use crate::infra::storage::entity::{ram_module, ram_type};

pub struct SeaOrmRamModulesRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmRamModulesRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: ram_module::Model) -> RamModule {
    RamModule {
        id: m.id,
        clock_mhz: m.clock_mhz,
        capacity_gb: m.capacity_gb,
        ram_type_id: m.ram_type_id,
        design: m.design,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(m: &RamModule) -> ram_module::ActiveModel {
    ram_module::ActiveModel {
        id: Set(m.id),
        clock_mhz: Set(m.clock_mhz),
        capacity_gb: Set(m.capacity_gb),
        ram_type_id: Set(m.ram_type_id),
        design: Set(m.design.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    }
}

#[async_trait]
impl RamModulesRepository for SeaOrmRamModulesRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<RamModule>> {
        Ok(ram_module::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        clock_mhz: i32,
        capacity_gb: i32,
        ram_type_id: Uuid,
        design: &str,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<RamModule>> {
        let mut query = ram_module::Entity::find()
            .filter(ram_module::Column::ClockMhz.eq(clock_mhz))
            .filter(ram_module::Column::CapacityGb.eq(capacity_gb))
            .filter(ram_module::Column::RamTypeId.eq(ram_type_id))
            .filter(ram_module::Column::Design.eq(design));
        if let Some(id) = exclude {
            query = query.filter(ram_module::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<RamModule>> {
        let rows = ram_module::Entity::find()
            .order_by(ram_module::Column::ClockMhz, Order::Asc)
            .order_by(ram_module::Column::CapacityGb, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<RamModuleSort>) -> RepoResult<Page<RamModule>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let mut query = ram_module::Entity::find();
        query = match req.sort {
            RamModuleSort::ClockMhz => query.order_by(ram_module::Column::ClockMhz, order),
            RamModuleSort::CapacityGb => query.order_by(ram_module::Column::CapacityGb, order),
            RamModuleSort::TypeName => query
                .join(JoinType::InnerJoin, ram_module::Relation::RamType.def())
                .order_by(ram_type::Column::Name, order),
        };
        let mut rows = query
            .order_by(ram_module::Column::Id, Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: rows.into_iter().map(to_domain).collect(),
            has_more,
        })
    }

    async fn insert(&self, module: RamModule) -> RepoResult<()> {
        ram_module::Entity::insert(to_active(&module))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, module: RamModule) -> RepoResult<()> {
        ram_module::Entity::update_many()
            .set(to_active(&module))
            .filter(ram_module::Column::Id.eq(module.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = ram_module::Entity::delete_many()
            .filter(ram_module::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
