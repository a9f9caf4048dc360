use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{NewPsu, NewPsuCpuConnector, Psu, PsuCpuConnector, PsuPatch, PsuSort};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{CpuPowerConnectorsRepository, DictionaryRepository, PsusRepository};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// PSUs reference a form factor and an efficiency certificate, and own a
/// non-empty set of provided CPU power connectors with per-connector counts.
pub struct PsusService {
    repo: Arc<dyn PsusRepository>,
    form_factors: Arc<dyn DictionaryRepository>,
    certificates: Arc<dyn DictionaryRepository>,
    connectors: Arc<dyn CpuPowerConnectorsRepository>,
}

impl PsusService {
    pub fn new(
        repo: Arc<dyn PsusRepository>,
        form_factors: Arc<dyn DictionaryRepository>,
        certificates: Arc<dyn DictionaryRepository>,
        connectors: Arc<dyn CpuPowerConnectorsRepository>,
    ) -> Self {
        Self {
            repo,
            form_factors,
            certificates,
            connectors,
        }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Psu> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Psu, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Psu>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<PsuSort>) -> DomainResult<Page<Psu>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewPsu) -> DomainResult<Psu> {
        let name = normalized_name("name", &new.name)?;
        let form_factor_id = resolve_dictionary_ref(
            self.form_factors.as_ref(),
            EntityKind::PsuFormFactor,
            "form_factor_id",
            new.form_factor_id,
        )
        .await?;
        let certificate_id = resolve_dictionary_ref(
            self.certificates.as_ref(),
            EntityKind::PsuCertificate,
            "certificate_id",
            new.certificate_id,
        )
        .await?;
        let cpu_connectors = self.resolve_connectors(new.cpu_connectors).await?;
        self.ensure_name_free(&name, None).await?;
        let now = Utc::now();
        let psu = Psu {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            wattage: new.wattage,
            form_factor_id,
            certificate_id,
            cpu_connectors,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(psu.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %psu.id, "PSU created");
        Ok(psu)
    }

    pub async fn update(&self, id: Uuid, patch: PsuPatch) -> DomainResult<Psu> {
        let mut psu = self.get(id).await?;
        if let Some(name) = patch.name {
            psu.name = normalized_name("name", &name)?;
        }
        if let Some(wattage) = patch.wattage {
            psu.wattage = wattage;
        }
        if let Some(form_factor_id) = patch.form_factor_id {
            psu.form_factor_id = resolve_dictionary_ref(
                self.form_factors.as_ref(),
                EntityKind::PsuFormFactor,
                "form_factor_id",
                Some(form_factor_id),
            )
            .await?;
        }
        if let Some(certificate_id) = patch.certificate_id {
            psu.certificate_id = resolve_dictionary_ref(
                self.certificates.as_ref(),
                EntityKind::PsuCertificate,
                "certificate_id",
                Some(certificate_id),
            )
            .await?;
        }
        if let Some(cpu_connectors) = patch.cpu_connectors {
            psu.cpu_connectors = self.resolve_connectors(cpu_connectors).await?;
        }
        self.ensure_name_free(&psu.name, Some(id)).await?;
        psu.updated_at = Utc::now();
        self.repo.update(psu.clone()).await.map_err(storage_error)?;
        Ok(psu)
    }

    pub async fn replace(&self, id: Uuid, new: NewPsu) -> DomainResult<Psu> {
        let mut psu = self.get(id).await?;
        psu.name = normalized_name("name", &new.name)?;
        psu.wattage = new.wattage;
        psu.form_factor_id = resolve_dictionary_ref(
            self.form_factors.as_ref(),
            EntityKind::PsuFormFactor,
            "form_factor_id",
            new.form_factor_id,
        )
        .await?;
        psu.certificate_id = resolve_dictionary_ref(
            self.certificates.as_ref(),
            EntityKind::PsuCertificate,
            "certificate_id",
            new.certificate_id,
        )
        .await?;
        psu.cpu_connectors = self.resolve_connectors(new.cpu_connectors).await?;
        self.ensure_name_free(&psu.name, Some(id)).await?;
        psu.updated_at = Utc::now();
        self.repo.update(psu.clone()).await.map_err(storage_error)?;
        Ok(psu)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "PSU deleted");
        }
        Ok(())
    }

    /// The owned set must be non-empty; every referenced connector must be
    /// non-null and resolvable. Duplicate connectors collapse to the first.
    async fn resolve_connectors(
        &self,
        refs: Vec<NewPsuCpuConnector>,
    ) -> DomainResult<Vec<PsuCpuConnector>> {
        if refs.is_empty() {
            return Err(DomainError::empty_collection("cpu_connectors"));
        }
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(refs.len());
        for entry in refs {
            let connector_id = entry
                .connector_id
                .ok_or(DomainError::missing_reference("cpu_connectors"))?;
            let found = self
                .connectors
                .find_by_id(connector_id)
                .await
                .map_err(storage_error)?;
            if found.is_none() {
                return Err(DomainError::not_found(
                    EntityKind::CpuPowerConnector,
                    connector_id,
                ));
            }
            if !seen.insert(connector_id) {
                continue;
            }
            resolved.push(PsuCpuConnector {
                connector_id,
                count: entry.count,
            });
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
