use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::model::{CpuPowerConnector, CpuPowerConnectorSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{CpuPowerConnectorsRepository, RepoResult};
use crate::infra::storage::entity::{
    cpu_power_connector, cpu_power_connector_compat, psu_cpu_connector,
};

/// Connectors own their self-referential compatible set; writes replace the
/// owned rows all-or-nothing.
pub struct SeaOrmCpuPowerConnectorsRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmCpuPowerConnectorsRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }

    async fn attach_compatible(
        &self,
        models: Vec<cpu_power_connector::Model>,
    ) -> RepoResult<Vec<CpuPowerConnector>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut by_owner: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if !ids.is_empty() {
            for row in cpu_power_connector_compat::Entity::find()
                .filter(cpu_power_connector_compat::Column::ConnectorId.is_in(ids))
                .all(&self.db)
                .await?
            {
                by_owner
                    .entry(row.connector_id)
                    .or_default()
                    .push(row.compatible_id);
            }
        }
        Ok(models
            .into_iter()
            .map(|m| {
                let compatible = by_owner.remove(&m.id).unwrap_or_default();
                to_domain(m, compatible)
            })
            .collect())
    }
}

fn to_domain(m: cpu_power_connector::Model, compatible: Vec<Uuid>) -> CpuPowerConnector {
    CpuPowerConnector {
        id: m.id,
        name: m.name,
        compatible,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(c: &CpuPowerConnector) -> cpu_power_connector::ActiveModel {
    cpu_power_connector::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

fn compat_rows(c: &CpuPowerConnector) -> Vec<cpu_power_connector_compat::ActiveModel> {
    c.compatible
        .iter()
        .map(|&compatible_id| cpu_power_connector_compat::ActiveModel {
            id: Set(Uuid::now_v7()),
            connector_id: Set(c.id),
            compatible_id: Set(compatible_id),
            created_at: Set(Utc::now()),
        })
        .collect()
}

#[async_trait]
impl CpuPowerConnectorsRepository for SeaOrmCpuPowerConnectorsRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CpuPowerConnector>> {
        let Some(model) = cpu_power_connector::Entity::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        let compatible = cpu_power_connector_compat::Entity::find()
            .filter(cpu_power_connector_compat::Column::ConnectorId.eq(id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| r.compatible_id)
            .collect();
        Ok(Some(to_domain(model, compatible)))
    }

    async fn referenced_by(&self, id: Uuid) -> RepoResult<Option<&'static str>> {
        let compat = cpu_power_connector_compat::Entity::find()
            .filter(cpu_power_connector_compat::Column::CompatibleId.eq(id))
            .filter(cpu_power_connector_compat::Column::ConnectorId.ne(id))
            .one(&self.db)
            .await?;
        if compat.is_some() {
            return Ok(Some("compatible"));
        }
        let psu_row = psu_cpu_connector::Entity::find()
            .filter(psu_cpu_connector::Column::ConnectorId.eq(id))
            .one(&self.db)
            .await?;
        Ok(psu_row.map(|_| "cpu_connectors"))
    }

    async fn find_conflict(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<CpuPowerConnector>> {
        let mut query =
            cpu_power_connector::Entity::find().filter(cpu_power_connector::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(cpu_power_connector::Column::Id.ne(id));
        }
        let Some(model) = query.one(&self.db).await? else {
            return Ok(None);
        };
        let mut found = self.attach_compatible(vec![model]).await?;
        Ok(found.pop())
    }

    async fn list(&self) -> RepoResult<Vec<CpuPowerConnector>> {
        let models = cpu_power_connector::Entity::find()
            .order_by(cpu_power_connector::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        self.attach_compatible(models).await
    }

    async fn list_page(
        &self,
        req: &PageRequest<CpuPowerConnectorSort>,
    ) -> RepoResult<Page<CpuPowerConnector>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            CpuPowerConnectorSort::Name => cpu_power_connector::Column::Name,
        };
        let mut rows = cpu_power_connector::Entity::find()
            .order_by(column, order)
            .order_by(cpu_power_connector::Column::Id, Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: self.attach_compatible(rows).await?,
            has_more,
        })
    }

    async fn insert(&self, connector: CpuPowerConnector) -> RepoResult<()> {
        let owner = to_active(&connector);
        let rows = compat_rows(&connector);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cpu_power_connector::Entity::insert(owner)
                        .exec_without_returning(txn)
                        .await?;
                    if !rows.is_empty() {
                        cpu_power_connector_compat::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }

    async fn update(&self, connector: CpuPowerConnector) -> RepoResult<()> {
        let id = connector.id;
        let owner = to_active(&connector);
        let rows = compat_rows(&connector);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cpu_power_connector::Entity::update_many()
                        .set(owner)
                        .filter(cpu_power_connector::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    cpu_power_connector_compat::Entity::delete_many()
                        .filter(cpu_power_connector_compat::Column::ConnectorId.eq(id))
                        .exec(txn)
                        .await?;
                    if !rows.is_empty() {
                        cpu_power_connector_compat::Entity::insert_many(rows)
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
                    cpu_power_connector_compat::Entity::delete_many()
                        .filter(cpu_power_connector_compat::Column::ConnectorId.eq(id))
                        .exec(txn)
                        .await?;
                    let res = cpu_power_connector::Entity::delete_many()
                        .filter(cpu_power_connector::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await?;
        Ok(deleted)
    }
}
