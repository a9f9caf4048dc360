use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{Chipset, ChipsetPatch, ChipsetSort, NewChipset};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{ChipsetsRepository, DictionaryRepository};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// Chipsets reference a socket and are unique by `(name, socket_id)`.
pub struct ChipsetsService {
    repo: Arc<dyn ChipsetsRepository>,
    sockets: Arc<dyn DictionaryRepository>,
}

impl ChipsetsService {
    pub fn new(repo: Arc<dyn ChipsetsRepository>, sockets: Arc<dyn DictionaryRepository>) -> Self {
        Self { repo, sockets }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Chipset> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Chipset, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Chipset>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<ChipsetSort>) -> DomainResult<Page<Chipset>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewChipset) -> DomainResult<Chipset> {
        let name = normalized_name("name", &new.name)?;
        let socket_id = resolve_dictionary_ref(
            self.sockets.as_ref(),
            EntityKind::Socket,
            "socket_id",
            new.socket_id,
        )
        .await?;
        self.ensure_key_free(&name, socket_id, None).await?;
        let now = Utc::now();
        let chipset = Chipset {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            socket_id,
            created_at: now,
            updated_at: now,
        };
        self.repo
            .insert(chipset.clone())
            .await
            .map_err(storage_error)?;
        tracing::info!(id = %chipset.id, "chipset created");
        Ok(chipset)
    }

    pub async fn update(&self, id: Uuid, patch: ChipsetPatch) -> DomainResult<Chipset> {
        let mut chipset = self.get(id).await?;
        if let Some(name) = patch.name {
            chipset.name = normalized_name("name", &name)?;
        }
        if let Some(socket_id) = patch.socket_id {
            chipset.socket_id = resolve_dictionary_ref(
                self.sockets.as_ref(),
                EntityKind::Socket,
                "socket_id",
                Some(socket_id),
            )
            .await?;
        }
        self.ensure_key_free(&chipset.name, chipset.socket_id, Some(id))
            .await?;
        chipset.updated_at = Utc::now();
        self.repo
            .update(chipset.clone())
            .await
            .map_err(storage_error)?;
        Ok(chipset)
    }

    pub async fn replace(&self, id: Uuid, new: NewChipset) -> DomainResult<Chipset> {
        let mut chipset = self.get(id).await?;
        chipset.name = normalized_name("name", &new.name)?;
        chipset.socket_id = resolve_dictionary_ref(
            self.sockets.as_ref(),
            EntityKind::Socket,
            "socket_id",
            new.socket_id,
        )
        .await?;
        self.ensure_key_free(&chipset.name, chipset.socket_id, Some(id))
            .await?;
        chipset.updated_at = Utc::now();
        self.repo
            .update(chipset.clone())
            .await
            .map_err(storage_error)?;
        Ok(chipset)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "chipset deleted");
        }
        Ok(())
    }

    async fn ensure_key_free(
        &self,
        name: &str,
        socket_id: Uuid,
        exclude: Option<Uuid>,
    ) -> DomainResult<()> {
        let clash = self
            .repo
            .find_conflict(name, socket_id, exclude)
            .await
            .map_err(storage_error)?;
        if clash.is_some() {
            return Err(DomainError::unique_violation(
                vec!["name", "socket_id"],
                vec![name.to_string(), socket_id.to_string()],
            ));
        }
        Ok(())
    }
}
