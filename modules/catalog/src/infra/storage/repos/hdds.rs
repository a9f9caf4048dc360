use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::model::{Hdd, HddSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{HddsRepository, RepoResult};
use crate::infra::storage::entity::hdd;

pub struct SeaOrmHddsRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmHddsRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: hdd::Model) -> Hdd {
    Hdd {
        id: m.id,
        name: m.name,
        capacity_gb: m.capacity_gb,
        spindle_rpm: m.spindle_rpm,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(h: &Hdd) -> hdd::ActiveModel {
    hdd::ActiveModel {
        id: Set(h.id),
        name: Set(h.name.clone()),
        capacity_gb: Set(h.capacity_gb),
        spindle_rpm: Set(h.spindle_rpm),
        created_at: Set(h.created_at),
        updated_at: Set(h.updated_at),
    }
}

#[async_trait]
impl HddsRepository for SeaOrmHddsRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Hdd>> {
        Ok(hdd::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Hdd>> {
        let mut query = hdd::Entity::find()
            .filter(hdd::Column::Name.eq(name))
            .filter(hdd::Column::CapacityGb.eq(capacity_gb));
        if let Some(id) = exclude {
            query = query.filter(hdd::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<Hdd>> {
        let rows = hdd::Entity::find()
            .order_by(hdd::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<HddSort>) -> RepoResult<Page<Hdd>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            HddSort::Name => hdd::Column::Name,
            HddSort::CapacityGb => hdd::Column::CapacityGb,
        };
        let mut rows = hdd::Entity::find()
            .order_by(column, order)
            .order_by(hdd::Column::Id, Order::Asc)
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

    async fn insert(&self, hdd_row: Hdd) -> RepoResult<()> {
        hdd::Entity::insert(to_active(&hdd_row))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, hdd_row: Hdd) -> RepoResult<()> {
        hdd::Entity::update_many()
            .set(to_active(&hdd_row))
            .filter(hdd::Column::Id.eq(hdd_row.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = hdd::Entity::delete_many()
            .filter(hdd::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
