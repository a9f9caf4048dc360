use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::model::{Gpu, GpuSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{GpusRepository, RepoResult};
use crate::infra::storage::entity::{gpu, vendor};

pub struct SeaOrmGpusRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmGpusRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: gpu::Model) -> Gpu {
    Gpu {
        id: m.id,
        name: m.name,
        vendor_id: m.vendor_id,
        memory_gb: m.memory_gb,
        tdp_watts: m.tdp_watts,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(g: &Gpu) -> gpu::ActiveModel {
    gpu::ActiveModel {
        id: Set(g.id),
        name: Set(g.name.clone()),
        vendor_id: Set(g.vendor_id),
        memory_gb: Set(g.memory_gb),
        tdp_watts: Set(g.tdp_watts),
        created_at: Set(g.created_at),
        updated_at: Set(g.updated_at),
    }
}

#[async_trait]
impl GpusRepository for SeaOrmGpusRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gpu>> {
        Ok(gpu::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        name: &str,
        memory_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Gpu>> {
        let mut query = gpu::Entity::find()
            .filter(gpu::Column::Name.eq(name))
            .filter(gpu::Column::MemoryGb.eq(memory_gb));
        if let Some(id) = exclude {
            query = query.filter(gpu::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<Gpu>> {
        let rows = gpu::Entity::find()
            .order_by(gpu::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<GpuSort>) -> RepoResult<Page<Gpu>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let mut query = gpu::Entity::find();
        query = match req.sort {
            GpuSort::Name => query.order_by(gpu::Column::Name, order),
            GpuSort::VendorName => query
                .join(JoinType::InnerJoin, gpu::Relation::Vendor.def())
                .order_by(vendor::Column::Name, order),
        };
        let mut rows = query
            .order_by(gpu::Column::Id, Order::Asc)
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

    async fn insert(&self, gpu_row: Gpu) -> RepoResult<()> {
        gpu::Entity::insert(to_active(&gpu_row))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, gpu_row: Gpu) -> RepoResult<()> {
        gpu::Entity::update_many()
            .set(to_active(&gpu_row))
            .filter(gpu::Column::Id.eq(gpu_row.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = gpu::Entity::delete_many()
            .filter(gpu::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
