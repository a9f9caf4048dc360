use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::model::{Cpu, CpuRamType, CpuSort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{CpusRepository, RepoResult};
use crate::infra::storage::entity::{cpu, cpu_ram_type, socket};

/// CPUs own their supported RAM rows; every write that touches them replaces
/// the whole set inside one transaction.
pub struct SeaOrmCpusRepo {
    db: DatabaseConnection,
    limits: LimitCfg,
}

impl SeaOrmCpusRepo {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self { db, limits }
    }

    async fn attach_ram(&self, models: Vec<cpu::Model>) -> RepoResult<Vec<Cpu>> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut by_cpu: HashMap<Uuid, Vec<CpuRamType>> = HashMap::new();
        if !ids.is_empty() {
            for row in cpu_ram_type::Entity::find()
                .filter(cpu_ram_type::Column::CpuId.is_in(ids))
                .all(&self.db)
                .await?
            {
                by_cpu.entry(row.cpu_id).or_default().push(CpuRamType {
                    ram_type_id: row.ram_type_id,
                    max_clock_mhz: row.max_clock_mhz,
                });
            }
        }
        Ok(models
            .into_iter()
            .map(|m| {
                let supported_ram = by_cpu.remove(&m.id).unwrap_or_default();
                to_domain(m, supported_ram)
            })
            .collect())
    }
}

fn to_domain(m: cpu::Model, supported_ram: Vec<CpuRamType>) -> Cpu {
    Cpu {
        id: m.id,
        name: m.name,
        socket_id: m.socket_id,
        cores: m.cores,
        threads: m.threads,
        tdp_watts: m.tdp_watts,
        supported_ram,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(c: &Cpu) -> cpu::ActiveModel {
    cpu::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        socket_id: Set(c.socket_id),
        cores: Set(c.cores),
        threads: Set(c.threads),
        tdp_watts: Set(c.tdp_watts),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

fn ram_rows(c: &Cpu) -> Vec<cpu_ram_type::ActiveModel> {
    c.supported_ram
        .iter()
        .map(|r| cpu_ram_type::ActiveModel {
            id: Set(Uuid::now_v7()),
            cpu_id: Set(c.id),
            ram_type_id: Set(r.ram_type_id),
            max_clock_mhz: Set(r.max_clock_mhz),
            created_at: Set(Utc::now()),
        })
        .collect()
}

#[async_trait]
impl CpusRepository for SeaOrmCpusRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cpu>> {
        let Some(model) = cpu::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let ram = cpu_ram_type::Entity::find()
            .filter(cpu_ram_type::Column::CpuId.eq(id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| CpuRamType {
                ram_type_id: r.ram_type_id,
                max_clock_mhz: r.max_clock_mhz,
            })
            .collect();
        Ok(Some(to_domain(model, ram)))
    }

    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Cpu>> {
        let mut query = cpu::Entity::find().filter(cpu::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(cpu::Column::Id.ne(id));
        }
        let Some(model) = query.one(&self.db).await? else {
            return Ok(None);
        };
        let mut cpus = self.attach_ram(vec![model]).await?;
        Ok(cpus.pop())
    }

    async fn list(&self) -> RepoResult<Vec<Cpu>> {
        let models = cpu::Entity::find()
            .order_by(cpu::Column::Name, Order::Asc)
            .all(&self.db)
            .await?;
        self.attach_ram(models).await
    }

    async fn list_page(&self, req: &PageRequest<CpuSort>) -> RepoResult<Page<Cpu>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let mut query = cpu::Entity::find();
        query = match req.sort {
            CpuSort::Name => query.order_by(cpu::Column::Name, order),
            CpuSort::SocketName => query
                .join(JoinType::InnerJoin, cpu::Relation::Socket.def())
                .order_by(socket::Column::Name, order),
            CpuSort::TdpWatts => query.order_by(cpu::Column::TdpWatts, order),
        };
        let mut rows = query
            .order_by(cpu::Column::Id, Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: self.attach_ram(rows).await?,
            has_more,
        })
    }

    async fn insert(&self, cpu_row: Cpu) -> RepoResult<()> {
        let owner = to_active(&cpu_row);
        let rows = ram_rows(&cpu_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cpu::Entity::insert(owner).exec_without_returning(txn).await?;
                    if !rows.is_empty() {
                        cpu_ram_type::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await?;
        Ok(())
    }

    async fn update(&self, cpu_row: Cpu) -> RepoResult<()> {
        let id = cpu_row.id;
        let owner = to_active(&cpu_row);
        let rows = ram_rows(&cpu_row);
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    cpu::Entity::update_many()
                        .set(owner)
                        .filter(cpu::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    cpu_ram_type::Entity::delete_many()
                        .filter(cpu_ram_type::Column::CpuId.eq(id))
                        .exec(txn)
                        .await?;
                    if !rows.is_empty() {
                        cpu_ram_type::Entity::insert_many(rows)
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
                    cpu_ram_type::Entity::delete_many()
                        .filter(cpu_ram_type::Column::CpuId.eq(id))
                        .exec(txn)
                        .await?;
                    let res = cpu::Entity::delete_many()
                        .filter(cpu::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await?;
        Ok(deleted)
    }
}
