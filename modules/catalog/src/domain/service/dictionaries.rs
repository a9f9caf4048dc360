use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{DictionaryEntry, DictionaryPatch, DictionarySort, NewDictionaryEntry};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::DictionaryRepository;

use super::{normalized_name, storage_error, DomainResult};

/// One service instance per plain name dictionary; the kind only feeds error
/// messages and tracing.
pub struct DictionaryService {
    kind: EntityKind,
    repo: Arc<dyn DictionaryRepository>,
}

impl DictionaryService {
    pub fn new(kind: EntityKind, repo: Arc<dyn DictionaryRepository>) -> Self {
        Self { kind, repo }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<DictionaryEntry> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(self.kind, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<DictionaryEntry>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(
        &self,
        req: PageRequest<DictionarySort>,
    ) -> DomainResult<Page<DictionaryEntry>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewDictionaryEntry) -> DomainResult<DictionaryEntry> {
        let name = normalized_name("name", &new.name)?;
        self.ensure_name_free(&name, None).await?;
        let now = Utc::now();
        let entry = DictionaryEntry {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(entry.clone()).await.map_err(storage_error)?;
        tracing::info!(kind = %self.kind, id = %entry.id, "dictionary entry created");
        Ok(entry)
    }

    pub async fn update(&self, id: Uuid, patch: DictionaryPatch) -> DomainResult<DictionaryEntry> {
        let mut entry = self.get(id).await?;
        if let Some(name) = patch.name {
            entry.name = normalized_name("name", &name)?;
        }
        self.ensure_name_free(&entry.name, Some(id)).await?;
        entry.updated_at = Utc::now();
        self.repo.update(entry.clone()).await.map_err(storage_error)?;
        Ok(entry)
    }

    pub async fn replace(&self, id: Uuid, new: NewDictionaryEntry) -> DomainResult<DictionaryEntry> {
        let mut entry = self.get(id).await?;
        entry.name = normalized_name("name", &new.name)?;
        self.ensure_name_free(&entry.name, Some(id)).await?;
        entry.updated_at = Utc::now();
        self.repo.update(entry.clone()).await.map_err(storage_error)?;
        Ok(entry)
    }

    /// Idempotent: deleting an absent entry is a success.
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(kind = %self.kind, id = %id, "dictionary entry deleted");
        }
        Ok(())
    }

    async fn ensure_name_free(&self, name: &str, exclude: Option<Uuid>) -> DomainResult<()> {
        let clash = self
            .repo
            .find_by_name(name, exclude)
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
