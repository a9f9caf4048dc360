use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::model::{Fan, FanSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{FansRepository, RepoResult};
use crate::infra::storage::entity::{fan, fan_size};

pub struct SeaOrmFansRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmFansRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: fan::Model) -> Fan {
    Fan {
        id: m.id,
        name: m.name,
        size_id: m.size_id,
        max_rpm: m.max_rpm,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(f: &Fan) -> fan::ActiveModel {
    fan::ActiveModel {
        id: Set(f.id),
        name: Set(f.name.clone()),
        size_id: Set(f.size_id),
        max_rpm: Set(f.max_rpm),
        created_at: Set(f.created_at),
        updated_at: Set(f.updated_at),
    }
}

#[async_trait]
impl FansRepository for SeaOrmFansRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Fan>> {
        Ok(fan::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        name: &str,
        size_id: Uuid,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Fan>> {
        let mut query = fan::Entity::find()
            .filter(fan::Column::Name.eq(name))
            .filter(fan::Column::SizeId.eq(size_id));
        if let Some(id) = exclude {
            query = query.filter(fan::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<Fan>> {
        let rows = fan::Entity::find()
            .order_by(fan::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<FanSort>) -> RepoResult<Page<Fan>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let mut query = fan::Entity::find();
        query = match req.sort {
            FanSort::Name => query.order_by(fan::Column::Name, order),
            FanSort::SizeMm => query
                .join(JoinType::InnerJoin, fan::Relation::Size.def())
                .order_by(fan_size::Column::SizeMm, order),
        };
        let mut rows = query
            .order_by(fan::Column::Id, Order::Asc)
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

    async fn insert(&self, fan_row: Fan) -> RepoResult<()> {
        fan::Entity::insert(to_active(&fan_row))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, fan_row: Fan) -> RepoResult<()> {
        fan::Entity::update_many()
            .set(to_active(&fan_row))
            .filter(fan::Column::Id.eq(fan_row.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = fan::Entity::delete_many()
            .filter(fan::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
