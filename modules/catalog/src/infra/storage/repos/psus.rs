use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::model::{Psu, PsuCpuConnector, PsuSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{PsusRepository, RepoResult};
use crate::infra::storage::entity::{psu, psu_cpu_connector};

/// PSUs own their CPU power connector rows; writes replace the owned rows
/// all-or-nothing.
pub struct SeaOrmPsusRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmPsusRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }

    async fn attach_connectors(&self, models: Vec<psu::Model>) -> RepoResult<Vec<Psu>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut by_psu: HashMap<Uuid, Vec<PsuCpuConnector>> = HashMap::new();
        if !ids.is_empty() {
            for row in psu_cpu_connector::Entity::find()
                .filter(psu_cpu_connector::Column::PsuId.is_in(ids))
                .all(&self.db)
                .await?
            {
                by_psu.entry(row.psu_id).or_default().push(PsuCpuConnector {
                    connector_id: row.connector_id,
                    count: row.count,
                });
            }
        }
        Ok(models
            .into_iter()
            .map(|m| {
                let cpu_connectors = by_psu.remove(&m.id).unwrap_or_default();
                to_domain(m, cpu_connectors)
            })
            .collect())
    }
}

fn to_domain(m: psu::Model, cpu_connectors: Vec<PsuCpuConnector>) -> Psu {
    Psu {
        id: m.id,
        name: m.name,
        wattage: m.wattage,
        form_factor_id: m.form_factor_id,
        certificate_id: m.certificate_id,
        cpu_connectors,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(p: &Psu) -> psu::ActiveModel {
    psu::ActiveModel {
        id: Set(p.id),
        name: Set(p.name.clone()),
        wattage: Set(p.wattage),
        form_factor_id: Set(p.form_factor_id),
        certificate_id: Set(p.certificate_id),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

fn connector_rows(p: &Psu) -> Vec<psu_cpu_connector::ActiveModel> {
    p.cpu_connectors
        .iter()
        .map(|c| psu_cpu_connector::ActiveModel {
            id: Set(Uuid::now_v7()),
            psu_id: Set(p.id),
            connector_id: Set(c.connector_id),
            count: Set(c.count),
            created_at: Set(Utc::now()),
        })
        .collect()
}

#[async_trait]
impl PsusRepository for SeaOrmPsusRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Psu>> {
        let Some(model) = psu::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let cpu_connectors = psu_cpu_connector::Entity::find()
            .filter(psu_cpu_connector::Column::PsuId.eq(id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| PsuCpuConnector {
                connector_id: r.connector_id,
                count: r.count,
            })
            .collect();
        Ok(Some(to_domain(model, cpu_connectors)))
    }

    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Psu>> {
        let mut query = psu::Entity::find().filter(psu::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(psu::Column::Id.ne(id));
        }
        let Some(model) = query.one(&self.db).await? else {
            return Ok(None);
        };
        let mut found = self.attach_connectors(vec![model]).await?;
        Ok(found.pop())
    }

    async fn list(&self) -> RepoResult<Vec<Psu>> {
        let models = psu::Entity::find()
            .order_by(psu::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        self.attach_connectors(models).await
    }

    async fn list_page(&self, req: &PageRequest<PsuSort>) -> RepoResult<Page<Psu>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            PsuSort::Name => psu::Column::Name,
            PsuSort::Wattage => psu::Column::Wattage,
        };
        let mut rows = psu::Entity::find()
            .order_by(column, order)
            .order_by(psu::Column::Id, Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: self.attach_connectors(rows).await?,
            has_more,
        })
    }

    async fn insert(&self, psu_row: Psu) -> RepoResult<()> {
        let owner = to_active(&psu_row);
        let rows = connector_rows(&psu_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    psu::Entity::insert(owner).exec_without_returning(txn).await?;
                    if !rows.is_empty() {
                        psu_cpu_connector::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }

    async fn update(&self, psu_row: Psu) -> RepoResult<()> {
        let id = psu_row.id;
        let owner = to_active(&psu_row);
        let rows = connector_rows(&psu_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    psu::Entity::update_many()
                        .set(owner)
                        .filter(psu::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    psu_cpu_connector::Entity::delete_many()
                        .filter(psu_cpu_connector::Column::PsuId.eq(id))
                        .exec(txn)
                        .await?;
                    if !rows.is_empty() {
                        psu_cpu_connector::Entity::insert_many(rows)
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
                    psu_cpu_connector::Entity::delete_many()
                        .filter(psu_cpu_connector::Column::PsuId.eq(id))
                        .exec(txn)
                        .await?;
                    let res = psu::Entity::delete_many()
                        .filter(psu::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await?;
        Ok(deleted)
    }
}
