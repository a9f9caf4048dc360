use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{
    CpuPowerConnector, CpuPowerConnectorPatch, CpuPowerConnectorSort, NewCpuPowerConnector,
};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::CpuPowerConnectorsRepository;

use super::{normalized_name, storage_error, DomainResult};

/// CPU power connectors carry a self-referential compatible set: the
/// connectors this one can stand in for. The set may be empty.
pub struct CpuPowerConnectorsService {
    repo: Arc<dyn CpuPowerConnectorsRepository>,
}

impl CpuPowerConnectorsService {
    pub fn new(repo: Arc<dyn CpuPowerConnectorsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<CpuPowerConnector> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::CpuPowerConnector, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<CpuPowerConnector>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(
        &self,
        req: PageRequest<CpuPowerConnectorSort>,
    ) -> DomainResult<Page<CpuPowerConnector>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewCpuPowerConnector) -> DomainResult<CpuPowerConnector> {
        let name = normalized_name("name", &new.name)?;
        let own_id = new.id.unwrap_or_else(Uuid::now_v7);
        let compatible = self.resolve_compatible(own_id, new.compatible).await?;
        self.ensure_name_free(&name, None).await?;
        let now = Utc::now();
        let connector = CpuPowerConnector {
            id: own_id,
            name,
            compatible,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(connector.clone())
            .await
            .map_err(storage_error)?;
        tracing::info!(id = %connector.id, "CPU power connector created");
        Ok(connector)
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: CpuPowerConnectorPatch,
    ) -> DomainResult<CpuPowerConnector> {
        let mut connector = self.get(id).await?;
        if let Some(name) = patch.name {
            connector.name = normalized_name("name", &name)?;
        }
        if let Some(compatible) = patch.compatible {
            connector.compatible = self.resolve_compatible(id, compatible).await?;
        }
        self.ensure_name_free(&connector.name, Some(id)).await?;
        connector.updated_at = Utc::now();
        self.repo
            .update(connector.clone())
            .await
            .map_err(storage_error)?;
        Ok(connector)
    }

    pub async fn replace(
        &self,
        id: Uuid,
        new: NewCpuPowerConnector,
    ) -> DomainResult<CpuPowerConnector> {
        let mut connector = self.get(id).await?;
        connector.name = normalized_name("name", &new.name)?;
        connector.compatible = self.resolve_compatible(id, new.compatible).await?;
        self.ensure_name_free(&connector.name, Some(id)).await?;
        connector.updated_at = Utc::now();
        self.repo
            .update(connector.clone())
            .await
            .map_err(storage_error)?;
        Ok(connector)
    }

    /// Idempotent for absent rows; a connector still referenced by another
    /// connector's compatible set or by a PSU is rejected naming the relation.
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if let Some(relation) = self.repo.referenced_by(id).await.map_err(storage_error)? {
            return Err(DomainError::validation(
                relation,
                "still referenced by existing rows",
            ));
        }
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "CPU power connector deleted");
        }
        Ok(())
    }

    /// Null elements are invalid parameters, dangling ids are not-found.
    /// Duplicates collapse; a connector may list itself.
    async fn resolve_compatible(
        &self,
        own_id: Uuid,
        refs: Vec<Option<Uuid>>,
    ) -> DomainResult<Vec<Uuid>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(refs.len());
        for entry in refs {
            let id = entry.ok_or(DomainError::missing_reference("compatible"))?;
            if !seen.insert(id) {
                continue;
            }
            if id != own_id {
                let found = self.repo.find_by_id(id).await.map_err(storage_error)?;
                if found.is_none() {
                    return Err(DomainError::not_found(EntityKind::CpuPowerConnector, id));
                }
            }
            resolved.push(id);
        }
        Ok(resolved)
    }

    async fn ensure_name_free(&self, name: &str, exclude: Option<Uuid>) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name"],
                vec![name.to_string()],
            ));
        }
        Ok(())
    }
}
