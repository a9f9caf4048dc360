use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::model::{Cooler, CoolerSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{CoolersRepository, RepoResult};
use crate::infra::storage::entity::{cooler, cooler_socket};

/// Coolers own their compatible socket rows; writes replace the owned rows
/// all-or-nothing.
pub struct SeaOrmCoolersRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmCoolersRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }

    async fn attach_sockets(&self, models: Vec<cooler::Model>) -> RepoResult<Vec<Cooler>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut by_cooler: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if !ids.is_empty() {
            for row in cooler_socket::Entity::find()
                .filter(cooler_socket::Column::CoolerId.is_in(ids))
                .all(&self.db)
                .await?
            {
                by_cooler.entry(row.cooler_id).or_default().push(row.socket_id);
            }
        }
        Ok(models
            .into_iter()
            .map(|m| {
                let sockets = by_cooler.remove(&m.id).unwrap_or_default();
                to_domain(m, sockets)
            })
            .collect())
    }
}

fn to_domain(m: cooler::Model, sockets: Vec<Uuid>) -> Cooler {
    Cooler {
        id: m.id,
        name: m.name,
        vendor_id: m.vendor_id,
        max_tdp_watts: m.max_tdp_watts,
        sockets,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(c: &Cooler) -> cooler::ActiveModel {
    cooler::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        vendor_id: Set(c.vendor_id),
        max_tdp_watts: Set(c.max_tdp_watts),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

fn socket_rows(c: &Cooler) -> Vec<cooler_socket::ActiveModel> {
    c.sockets
        .iter()
        .map(|&socket_id| cooler_socket::ActiveModel {
            id: Set(Uuid::now_v7()),
            cooler_id: Set(c.id),
            socket_id: Set(socket_id),
            created_at: Set(Utc::now()),
        })
        .collect()
}

#[async_trait]
impl CoolersRepository for SeaOrmCoolersRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cooler>> {
        let Some(model) = cooler::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let sockets = cooler_socket::Entity::find()
            .filter(cooler_socket::Column::CoolerId.eq(id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| r.socket_id)
            .collect();
        Ok(Some(to_domain(model, sockets)))
    }

    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Cooler>> {
        let mut query = cooler::Entity::find().filter(cooler::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(cooler::Column::Id.ne(id));
        }
        let Some(model) = query.one(&self.db).await? else {
            return Ok(None);
        };
        let mut found = self.attach_sockets(vec![model]).await?;
        Ok(found.pop())
    }

    async fn list(&self) -> RepoResult<Vec<Cooler>> {
        let models = cooler::Entity::find()
            .order_by(cooler::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        self.attach_sockets(models).await
    }

    async fn list_page(&self, req: &PageRequest<CoolerSort>) -> RepoResult<Page<Cooler>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            CoolerSort::Name => cooler::Column::Name,
            CoolerSort::MaxTdpWatts => cooler::Column::MaxTdpWatts,
        };
        let mut rows = cooler::Entity::find()
            .order_by(column, order)
            .order_by(cooler::Column::Id, Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: self.attach_sockets(rows).await?,
            has_more,
        })
    }

    async fn insert(&self, cooler_row: Cooler) -> RepoResult<()> {
        let owner = to_active(&cooler_row);
        let rows = socket_rows(&cooler_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cooler::Entity::insert(owner)
                        .exec_without_returning(txn)
                        .await?;
                    if !rows.is_empty() {
                        cooler_socket::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }

    async fn update(&self, cooler_row: Cooler) -> RepoResult<()> {
        let id = cooler_row.id;
        let owner = to_active(&cooler_row);
        let rows = socket_rows(&cooler_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cooler::Entity::update_many()
                        .set(owner)
                        .filter(cooler::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    cooler_socket::Entity::delete_many()
                        .filter(cooler_socket::Column::CoolerId.eq(id))
                        .exec(txn)
                        .await?;
                    if !rows.is_empty() {
                        cooler_socket::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    cooler_socket::Entity::delete_many()
                        .filter(cooler_socket::Column::CoolerId.eq(id))
                        .exec(txn)
                        .await?;
                    let res = cooler::Entity::delete_many()
                        .filter(cooler::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await?;
        Ok(deleted)
    }
}
