use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::model::{FanSize, FanSizeSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{FanSizesRepository, RepoResult};
use crate::infra::storage::entity::fan_size;

pub struct SeaOrmFanSizesRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmFanSizesRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: fan_size::Model) -> FanSize {
    FanSize {
        id: m.id,
        size_mm: m.size_mm,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(s: &FanSize) -> fan_size::ActiveModel {
    fan_size::ActiveModel {
        id: Set(s.id),
        size_mm: Set(s.size_mm),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

#[async_trait]
impl FanSizesRepository for SeaOrmFanSizesRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FanSize>> {
        Ok(fan_size::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        size_mm: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<FanSize>> {
        let mut query = fan_size::Entity::find().filter(fan_size::Column::SizeMm.eq(size_mm));
        if let Some(id) = exclude {
            query = query.filter(fan_size::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<FanSize>> {
        let rows = fan_size::Entity::find()
            .order_by(fan_size::Column::SizeMm, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<FanSizeSort>) -> RepoResult<Page<FanSize>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            FanSizeSort::SizeMm => fan_size::Column::SizeMm,
        };
        let mut rows = fan_size::Entity::find()
            .order_by(column, order)
            .order_by(fan_size::Column::Id, Order::Asc)
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

    async fn insert(&self, size: FanSize) -> RepoResult<()> {
        fan_size::Entity::insert(to_active(&size))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, size: FanSize) -> RepoResult<()> {
        fan_size::Entity::update_many()
            .set(to_active(&size))
            .filter(fan_size::Column::Id.eq(size.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = fan_size::Entity::delete_many()
            .filter(fan_size::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
