use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{NewRamModule, RamModule, RamModulePatch, RamModuleSort};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{DictionaryRepository, RamModulesRepository};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// RAM modules are unique by the composite key
/// `(clock_mhz, capacity_gb, ram_type_id, design)`.
pub struct RamModulesService {
    repo: Arc<dyn RamModulesRepository>,
    ram_types: Arc<dyn DictionaryRepository>,
}

impl RamModulesService {
    pub fn new(
        repo: Arc<dyn RamModulesRepository>,
        ram_types: Arc<dyn DictionaryRepository>,
    ) -> Self {
        Self { repo, ram_types }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<RamModule> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::RamModule, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<RamModule>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<RamModuleSort>) -> DomainResult<Page<RamModule>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewRamModule) -> DomainResult<RamModule> {
        let design = normalized_name("design", &new.design)?;
        let ram_type_id = resolve_dictionary_ref(
            self.ram_types.as_ref(),
            EntityKind::RamType,
            "ram_type_id",
            new.ram_type_id,
        )
        .await?;
        self.ensure_key_free(new.clock_mhz, new.capacity_gb, ram_type_id, &design, None)
            .await?;
        let now = Utc::now();
        let module = RamModule {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            clock_mhz: new.clock_mhz,
            capacity_gb: new.capacity_gb,
            ram_type_id,
            design,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(module.clone())
            .await
            .map_err(storage_error)?;
        tracing::info!(id = %module.id, "RAM module created");
        Ok(module)
    }

    pub async fn update(&self, id: Uuid, patch: RamModulePatch) -> DomainResult<RamModule> {
        let mut module = self.get(id).await?;
        if let Some(clock_mhz) = patch.clock_mhz {
            module.clock_mhz = clock_mhz;
        }
        if let Some(capacity_gb) = patch.capacity_gb {
            module.capacity_gb = capacity_gb;
        }
        if let Some(ram_type_id) = patch.ram_type_id {
            module.ram_type_id = resolve_dictionary_ref(
                self.ram_types.as_ref(),
                EntityKind::RamType,
                "ram_type_id",
                Some(ram_type_id),
            )
            .await?;
        }
        if let Some(design) = patch.design {
            module.design = normalized_name("design", &design)?;
        }
        self.ensure_key_free(
            module.clock_mhz,
            module.capacity_gb,
            module.ram_type_id,
            &module.design,
            Some(id),
        )
        .await?;
        module.updated_at = Utc::now();
        self.repo
            .update(module.clone())
            .await
            .map_err(storage_error)?;
        Ok(module)
    }

    pub async fn replace(&self, id: Uuid, new: NewRamModule) -> DomainResult<RamModule> {
        let mut module = self.get(id).await?;
        module.design = normalized_name("design", &new.design)?;
        module.ram_type_id = resolve_dictionary_ref(
            self.ram_types.as_ref(),
            EntityKind::RamType,
            "ram_type_id",
            new.ram_type_id,
        )
        .await?;
        module.clock_mhz = new.clock_mhz;
        module.capacity_gb = new.capacity_gb;
        self.ensure_key_free(
            module.clock_mhz,
            module.capacity_gb,
            module.ram_type_id,
            &module.design,
            Some(id),
        )
        .await?;
        module.updated_at = Utc::now();
        self.repo
            .update(module.clone())
            .await
            .map_err(storage_error)?;
        Ok(module)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "RAM module deleted");
        }
        Ok(())
    }

    async fn ensure_key_free(
        &self,
        clock_mhz: i32,
        capacity_gb: i32,
        ram_type_id: Uuid,
        design: &str,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(clock_mhz, capacity_gb, ram_type_id, design, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["clock_mhz", "capacity_gb", "ram_type_id", "design"],
                vec![
                    clock_mhz.to_string(),
                    capacity_gb.to_string(),
                    ram_type_id.to_string(),
                    design.to_string(),
                ],
            ));
        }
        Ok(())
    }
}
