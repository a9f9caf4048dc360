use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::model::{Ssd, SsdSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{RepoResult, SsdsRepository};
use crate::infra::storage::entity::ssd;

pub struct SeaOrmSsdsRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmSsdsRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: ssd::Model) -> Ssd {
    Ssd {
        id: m.id,
        name: m.name,
        capacity_gb: m.capacity_gb,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(s: &Ssd) -> ssd::ActiveModel {
    ssd::ActiveModel {
        id: Set(s.id),
        name: Set(s.name.clone()),
        capacity_gb: Set(s.capacity_gb),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

#[async_trait]
impl SsdsRepository for SeaOrmSsdsRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Ssd>> {
        Ok(ssd::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Ssd>> {
        let mut query = ssd::Entity::find()
            .filter(ssd::Column::Name.eq(name))
            .filter(ssd::Column::CapacityGb.eq(capacity_gb));
        if let Some(id) = exclude {
            query = query.filter(ssd::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<Ssd>> {
        let rows = ssd::Entity::find()
            .order_by(ssd::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<SsdSort>) -> RepoResult<Page<Ssd>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            SsdSort::Name => ssd::Column::Name,
            SsdSort::CapacityGb => ssd::Column::CapacityGb,
        };
        let mut rows = ssd::Entity::find()
            .order_by(column, order)
            .order_by(ssd::Column::Id, Order::Asc)
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

    async fn insert(&self, ssd_row: Ssd) -> RepoResult<()> {
        ssd::Entity::insert(to_active(&ssd_row))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, ssd_row: Ssd) -> RepoResult<()> {
        ssd::Entity::update_many()
            .set(to_active(&ssd_row))
            .filter(ssd::Column::Id.eq(ssd_row.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = ssd::Entity::delete_many()
            .filter(ssd::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
