use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{Gpu, GpuPatch, GpuSort, NewGpu};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{DictionaryRepository, GpusRepository};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// GPUs reference a vendor and are unique by `(name, memory_gb)`: the same
/// board name may ship with different memory configurations.
pub struct GpusService {
    repo: Arc<dyn GpusRepository>,
    vendors: Arc<dyn DictionaryRepository>,
}

impl GpusService {
    pub fn new(repo: Arc<dyn GpusRepository>, vendors: Arc<dyn DictionaryRepository>) -> Self {
        Self { repo, vendors }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Gpu> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Gpu, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Gpu>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<GpuSort>) -> DomainResult<Page<Gpu>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewGpu) -> DomainResult<Gpu> {
        let name = normalized_name("name", &new.name)?;
        let vendor_id = resolve_dictionary_ref(
            self.vendors.as_ref(),
            EntityKind::Vendor,
            "vendor_id",
            new.vendor_id,
        )
        .await?;
        self.ensure_key_free(&name, new.memory_gb, None).await?;
        let now = Utc::now();
        let gpu = Gpu {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            vendor_id,
            memory_gb: new.memory_gb,
            tdp_watts: new.tdp_watts,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(gpu.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %gpu.id, "GPU created");
        Ok(gpu)
    }

    pub async fn update(&self, id: Uuid, patch: GpuPatch) -> DomainResult<Gpu> {
        let mut gpu = self.get(id).await?;
        if let Some(name) = patch.name {
            gpu.name = normalized_name("name", &name)?;
        }
        if let Some(vendor_id) = patch.vendor_id {
            gpu.vendor_id = resolve_dictionary_ref(
                self.vendors.as_ref(),
                EntityKind::Vendor,
                "vendor_id",
                Some(vendor_id),
            )
            .await?;
        }
        if let Some(memory_gb) = patch.memory_gb {
            gpu.memory_gb = memory_gb;
        }
        if let Some(tdp_watts) = patch.tdp_watts {
            gpu.tdp_watts = tdp_watts;
        }
        self.ensure_key_free(&gpu.name, gpu.memory_gb, Some(id)).await?;
        gpu.updated_at = Utc::now();
        self.repo.update(gpu.clone()).await.map_err(storage_error)?;
        Ok(gpu)
    }

    pub async fn replace(&self, id: Uuid, new: NewGpu) -> DomainResult<Gpu> {
        let mut gpu = self.get(id).await?;
        gpu.name = normalized_name("name", &new.name)?;
        gpu.vendor_id = resolve_dictionary_ref(
            self.vendors.as_ref(),
            EntityKind::Vendor,
            "vendor_id",
            new.vendor_id,
        )
        .await?;
        gpu.memory_gb = new.memory_gb;
        gpu.tdp_watts = new.tdp_watts;
        self.ensure_key_free(&gpu.name, gpu.memory_gb, Some(id)).await?;
        gpu.updated_at = Utc::now();
        self.repo.update(gpu.clone()).await.map_err(storage_error)?;
        Ok(gpu)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "GPU deleted");
        }
        Ok(())
    }

    async fn ensure_key_free(
        &self,
        name: &str,
        memory_gb: i32,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, memory_gb, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name", "memory_gb"],
                vec![name.to_string(), memory_gb.to_string()],
            ));
        }
        Ok(())
    }
}
