use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{
    Cooler, CoolerPatch, CoolerSort, Fan, FanPatch, FanSize, FanSizePatch, FanSizeSort, FanSort,
    NewCooler, NewFan, NewFanSize,
};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{
    CoolersRepository, DictionaryRepository, FanSizesRepository, FansRepository,
};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// Fan sizes are a dictionary keyed by the physical dimension in millimetres.
pub struct FanSizesService {
    repo: Arc<dyn FanSizesRepository>,
}

impl FanSizesService {
    pub fn new(repo: Arc<dyn FanSizesRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<FanSize> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::FanSize, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<FanSize>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<FanSizeSort>) -> DomainResult<Page<FanSize>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewFanSize) -> DomainResult<FanSize> {
        let size_mm = valid_size(new.size_mm)?;
        self.ensure_size_free(size_mm, None).await?;
        let now = Utc::now();
        let size = FanSize {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            size_mm,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(size.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %size.id, "fan size created");
        Ok(size)
    }

    pub async fn update(&self, id: Uuid, patch: FanSizePatch) -> DomainResult<FanSize> {
        let mut size = self.get(id).await?;
        if let Some(size_mm) = patch.size_mm {
            size.size_mm = valid_size(size_mm)?;
        }
        self.ensure_size_free(size.size_mm, Some(id)).await?;
        size.updated_at = Utc::now();
        self.repo.update(size.clone()).await.map_err(storage_error)?;
        Ok(size)
    }

    pub async fn replace(&self, id: Uuid, new: NewFanSize) -> DomainResult<FanSize> {
        let mut size = self.get(id).await?;
        size.size_mm = valid_size(new.size_mm)?;
        self.ensure_size_free(size.size_mm, Some(id)).await?;
        size.updated_at = Utc::now();
        self.repo.update(size.clone()).await.map_err(storage_error)?;
        Ok(size)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "fan size deleted");
        }
        Ok(())
    }

    async fn ensure_size_free(&self, size_mm: i32, exclude: Option<Uuid>) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(size_mm, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["size_mm"],
                vec![size_mm.to_string()],
            ));
        }
        Ok(())
    }
}

fn valid_size(size_mm: i32) -> DomainResult<i32> {
    if size_mm <= 0 {
        return Err(DomainError::validation("size_mm", "must be positive"));
    }
    Ok(size_mm)
}

/// Coolers reference a vendor and own a non-empty set of compatible sockets.
pub struct CoolersService {
    repo: Arc<dyn CoolersRepository>,
    vendors: Arc<dyn DictionaryRepository>,
    sockets: Arc<dyn DictionaryRepository>,
}

impl CoolersService {
    pub fn new(
        repo: Arc<dyn CoolersRepository>,
        vendors: Arc<dyn DictionaryRepository>,
        sockets: Arc<dyn DictionaryRepository>,
    ) -> Self {
        Self {
            repo,
            vendors,
            sockets,
        }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Cooler> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Cooler, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Cooler>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<CoolerSort>) -> DomainResult<Page<Cooler>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewCooler) -> DomainResult<Cooler> {
        let name = normalized_name("name", &new.name)?;
        let vendor_id = resolve_dictionary_ref(
            self.vendors.as_ref(),
            EntityKind::Vendor,
            "vendor_id",
            new.vendor_id,
        )
        .await?;
        let sockets = self.resolve_sockets(new.sockets).await?;
        self.ensure_name_free(&name, None).await?;
        let now = Utc::now();
        let cooler = Cooler {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            vendor_id,
            max_tdp_watts: new.max_tdp_watts,
            sockets,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(cooler.clone())
            .await
            .map_err(storage_error)?;
        tracing::info!(id = %cooler.id, "cooler created");
        Ok(cooler)
    }

    pub async fn update(&self, id: Uuid, patch: CoolerPatch) -> DomainResult<Cooler> {
        let mut cooler = self.get(id).await?;
        if let Some(name) = patch.name {
            cooler.name = normalized_name("name", &name)?;
        }
        if let Some(vendor_id) = patch.vendor_id {
            cooler.vendor_id = resolve_dictionary_ref(
                self.vendors.as_ref(),
                EntityKind::Vendor,
                "vendor_id",
                Some(vendor_id),
            )
            .await?;
        }
        if let Some(max_tdp_watts) = patch.max_tdp_watts {
            cooler.max_tdp_watts = max_tdp_watts;
        }
        if let Some(sockets) = patch.sockets {
            cooler.sockets = self.resolve_sockets(sockets).await?;
        }
        self.ensure_name_free(&cooler.name, Some(id)).await?;
        cooler.updated_at = Utc::now();
        self.repo
            .update(cooler.clone())
            .await
            .map_err(storage_error)?;
        Ok(cooler)
    }

    pub async fn replace(&self, id: Uuid, new: NewCooler) -> DomainResult<Cooler> {
        let mut cooler = self.get(id).await?;
        cooler.name = normalized_name("name", &new.name)?;
        cooler.vendor_id = resolve_dictionary_ref(
            self.vendors.as_ref(),
            EntityKind::Vendor,
            "vendor_id",
            new.vendor_id,
        )
        .await?;
        cooler.max_tdp_watts = new.max_tdp_watts;
        cooler.sockets = self.resolve_sockets(new.sockets).await?;
        self.ensure_name_free(&cooler.name, Some(id)).await?;
        cooler.updated_at = Utc::now();
        self.repo
            .update(cooler.clone())
            .await
            .map_err(storage_error)?;
        Ok(cooler)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "cooler deleted");
        }
        Ok(())
    }

    /// The owned set must be non-empty; null elements are invalid parameters
    /// and dangling sockets are not-found. Duplicates collapse.
    async fn resolve_sockets(&self, refs: Vec<Option<Uuid>>) -> DomainResult<Vec<Uuid>> {
        if refs.is_empty() {
            return Err(DomainError::empty_collection("sockets"));
        }
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(refs.len());
        for entry in refs {
            let socket_id = resolve_dictionary_ref(
                self.sockets.as_ref(),
                EntityKind::Socket,
                "sockets",
                entry,
            )
            .await?;
            if !seen.insert(socket_id) {
                continue;
            }
            resolved.push(socket_id);
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

/// Fans reference a fan size and are unique by `(name, size_id)`.
pub struct FansService {
    repo: Arc<dyn FansRepository>,
    sizes: Arc<dyn FanSizesRepository>,
}

impl FansService {
    pub fn new(repo: Arc<dyn FansRepository>, sizes: Arc<dyn FanSizesRepository>) -> Self {
        Self { repo, sizes }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Fan> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Fan, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Fan>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<FanSort>) -> DomainResult<Page<Fan>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewFan) -> DomainResult<Fan> {
        let name = normalized_name("name", &new.name)?;
        let size_id = self.resolve_size(new.size_id).await?;
        self.ensure_key_free(&name, size_id, None).await?;
        let now = Utc::now();
        let fan = Fan {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            size_id,
            max_rpm: new.max_rpm,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(fan.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %fan.id, "fan created");
        Ok(fan)
    }

    pub async fn update(&self, id: Uuid, patch: FanPatch) -> DomainResult<Fan> {
        let mut fan = self.get(id).await?;
        if let Some(name) = patch.name {
            fan.name = normalized_name("name", &name)?;
        }
        if let Some(size_id) = patch.size_id {
            fan.size_id = self.resolve_size(Some(size_id)).await?;
        }
        if let Some(max_rpm) = patch.max_rpm {
            fan.max_rpm = max_rpm;
        }
        self.ensure_key_free(&fan.name, fan.size_id, Some(id)).await?;
        fan.updated_at = Utc::now();
        self.repo.update(fan.clone()).await.map_err(storage_error)?;
        Ok(fan)
    }

    pub async fn replace(&self, id: Uuid, new: NewFan) -> DomainResult<Fan> {
        let mut fan = self.get(id).await?;
        fan.name = normalized_name("name", &new.name)?;
        fan.size_id = self.resolve_size(new.size_id).await?;
        fan.max_rpm = new.max_rpm;
        self.ensure_key_free(&fan.name, fan.size_id, Some(id)).await?;
        fan.updated_at = Utc::now();
        self.repo.update(fan.clone()).await.map_err(storage_error)?;
        Ok(fan)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "fan deleted");
        }
        Ok(())
    }

    async fn resolve_size(&self, size_id: Option<Uuid>) -> DomainResult<Uuid> {
        let size_id = size_id.ok_or(DomainError::missing_reference("size_id"))?;
        let found = self
            .sizes
            .find_by_id(size_id)
            .await
            .map_err(storage_error)?;
        if found.is_none() {
            return Err(DomainError::not_found(EntityKind::FanSize, size_id));
        }
        Ok(size_id)
    }

    async fn ensure_key_free(
        &self,
        name: &str,
        size_id: Uuid,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, size_id, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name", "size_id"],
                vec![name.to_string(), size_id.to_string()],
            ));
        }
        Ok(())
    }
}
