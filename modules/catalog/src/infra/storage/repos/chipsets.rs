use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::model::{Chipset, ChipsetSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{ChipsetsRepository, RepoResult};
use crate::infra::storage::entity::{chipset, socket};

pub struct SeaOrmChipsetsRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmChipsetsRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }
}

fn to_domain(m: chipset::Model) -> Chipset {
    Chipset {
        id: m.id,
        name: m.name,
        socket_id: m.socket_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(c: &Chipset) -> chipset::ActiveModel {
    chipset::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        socket_id: Set(c.socket_id),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

#[async_trait]
impl ChipsetsRepository for SeaOrmChipsetsRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chipset>> {
        Ok(chipset::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain))
    }

    async fn find_conflict(
        &self,
        name: &str,
        socket_id: Uuid,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Chipset>> {
        let mut query = chipset::Entity::find()
            .filter(chipset::Column::Name.eq(name))
            .filter(chipset::Column::SocketId.eq(socket_id));
        if let Some(id) = exclude {
            query = query.filter(chipset::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.map(to_domain))
    }

    async fn list(&self) -> RepoResult<Vec<Chipset>> {
        let rows = chipset::Entity::find()
            .order_by(chipset::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_page(&self, req: &PageRequest<ChipsetSort>) -> RepoResult<Page<Chipset>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let mut query = chipset::Entity::find();
        query = match req.sort {
            ChipsetSort::Name => query.order_by(chipset::Column::Name, order),
            ChipsetSort::SocketName => query
                .join(JoinType::InnerJoin, chipset::Relation::Socket.def())
                .order_by(socket::Column::Name, order),
        };
        // Id as a tiebreak keeps pages stable under equal sort keys.
        let mut rows = query
            .order_by(chipset::Column::Id, Order::Asc)
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

    async fn insert(&self, chipset_row: Chipset) -> RepoResult<()> {
        chipset::Entity::insert(to_active(&chipset_row))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, chipset_row: Chipset) -> RepoResult<()> {
        chipset::Entity::update_many()
            .set(to_active(&chipset_row))
            .filter(chipset::Column::Id.eq(chipset_row.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = chipset::Entity::delete_many()
            .filter(chipset::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
