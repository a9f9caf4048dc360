use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{Hdd, HddPatch, HddSort, NewHdd, NewSsd, Ssd, SsdPatch, SsdSort};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{HddsRepository, SsdsRepository};

use super::{normalized_name, storage_error, DomainResult};

/// SSDs are unique by `(name, capacity_gb)`.
pub struct SsdsService {
    repo: Arc<dyn SsdsRepository>,
}

impl SsdsService {
    pub fn new(repo: Arc<dyn SsdsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Ssd> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Ssd, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Ssd>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<SsdSort>) -> DomainResult<Page<Ssd>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewSsd) -> DomainResult<Ssd> {
        let name = normalized_name("name", &new.name)?;
        self.ensure_key_free(&name, new.capacity_gb, None).await?;
        let now = Utc::now();
        let ssd = Ssd {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            capacity_gb: new.capacity_gb,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(ssd.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %ssd.id, "SSD created");
        Ok(ssd)
    }

    pub async fn update(&self, id: Uuid, patch: SsdPatch) -> DomainResult<Ssd> {
        let mut ssd = self.get(id).await?;
        if let Some(name) = patch.name {
            ssd.name = normalized_name("name", &name)?;
        }
        if let Some(capacity_gb) = patch.capacity_gb {
            ssd.capacity_gb = capacity_gb;
        }
        self.ensure_key_free(&ssd.name, ssd.capacity_gb, Some(id)).await?;
        ssd.updated_at = Utc::now();
        self.repo.update(ssd.clone()).await.map_err(storage_error)?;
        Ok(ssd)
    }

    pub async fn replace(&self, id: Uuid, new: NewSsd) -> DomainResult<Ssd> {
        let mut ssd = self.get(id).await?;
        ssd.name = normalized_name("name", &new.name)?;
        ssd.capacity_gb = new.capacity_gb;
        self.ensure_key_free(&ssd.name, ssd.capacity_gb, Some(id)).await?;
        ssd.updated_at = Utc::now();
        self.repo.update(ssd.clone()).await.map_err(storage_error)?;
        Ok(ssd)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "SSD deleted");
        }
        Ok(())
    }

    async fn ensure_key_free(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, capacity_gb, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name", "capacity_gb"],
                vec![name.to_string(), capacity_gb.to_string()],
            ));
        }
        Ok(())
    }
}

/// HDDs share the SSD uniqueness key and add a spindle speed.
pub struct HddsService {
    repo: Arc<dyn HddsRepository>,
}

impl HddsService {
    pub fn new(repo: Arc<dyn HddsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Hdd> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Hdd, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Hdd>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<HddSort>) -> DomainResult<Page<Hdd>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewHdd) -> DomainResult<Hdd> {
        let name = normalized_name("name", &new.name)?;
        self.ensure_key_free(&name, new.capacity_gb, None).await?;
        let now = Utc::now();
        let hdd = Hdd {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            capacity_gb: new.capacity_gb,
            spindle_rpm: new.spindle_rpm,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(hdd.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %hdd.id, "HDD created");
        Ok(hdd)
    }

    pub async fn update(&self, id: Uuid, patch: HddPatch) -> DomainResult<Hdd> {
        let mut hdd = self.get(id).await?;
        if let Some(name) = patch.name {
            hdd.name = normalized_name("name", &name)?;
        }
        if let Some(capacity_gb) = patch.capacity_gb {
            hdd.capacity_gb = capacity_gb;
        }
        if let Some(spindle_rpm) = patch.spindle_rpm {
            hdd.spindle_rpm = spindle_rpm;
        }
        self.ensure_key_free(&hdd.name, hdd.capacity_gb, Some(id)).await?;
        hdd.updated_at = Utc::now();
        self.repo.update(hdd.clone()).await.map_err(storage_error)?;
        Ok(hdd)
    }

    pub async fn replace(&self, id: Uuid, new: NewHdd) -> DomainResult<Hdd> {
        let mut hdd = self.get(id).await?;
        hdd.name = normalized_name("name", &new.name)?;
        hdd.capacity_gb = new.capacity_gb;
        hdd.spindle_rpm = new.spindle_rpm;
        self.ensure_key_free(&hdd.name, hdd.capacity_gb, Some(id)).await?;
        hdd.updated_at = Utc::now();
        self.repo.update(hdd.clone()).await.map_err(storage_error)?;
        Ok(hdd)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "HDD deleted");
        }
        Ok(())
    }

    async fn ensure_key_free(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, capacity_gb, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name", "capacity_gb"],
                vec![name.to_string(), capacity_gb.to_string()],
            ));
        }
        Ok(())
    }
}
