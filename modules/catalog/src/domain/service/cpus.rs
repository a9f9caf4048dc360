use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::model::{Cpu, CpuPatch, CpuRamType, CpuSort, NewCpu, NewCpuRamType};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repo::{CpusRepository, DictionaryRepository};

use super::{normalized_name, resolve_dictionary_ref, storage_error, DomainResult};

/// CPUs reference a socket and own a non-empty set of supported RAM types,
/// each carrying the maximum supported clock.
pub struct CpusService {
    repo: Arc<dyn CpusRepository>,
    sockets: Arc<dyn DictionaryRepository>,
    ram_types: Arc<dyn DictionaryRepository>,
}

impl CpusService {
    pub fn new(
        repo: Arc<dyn CpusRepository>,
        sockets: Arc<dyn DictionaryRepository>,
        ram_types: Arc<dyn DictionaryRepository>,
    ) -> Self {
        Self {
            repo,
            sockets,
            ram_types,
        }
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Cpu> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::not_found(EntityKind::Cpu, id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Cpu>> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn list_page(&self, req: PageRequest<CpuSort>) -> DomainResult<Page<Cpu>> {
        self.repo.list_page(&req).await.map_err(storage_error)
    }

    pub async fn create(&self, new: NewCpu) -> DomainResult<Cpu> {
        let name = normalized_name("name", &new.name)?;
        let socket_id = resolve_dictionary_ref(
            self.sockets.as_ref(),
            EntityKind::Socket,
            "socket_id",
            new.socket_id,
        )
        .await?;
        let supported_ram = self.resolve_supported_ram(new.supported_ram).await?;
        self.ensure_name_free(&name, None).await?;
        let now = Utc::now();
        let cpu = Cpu {
            id: new.id.unwrap_or_else(Uuid::now_v7),
            name,
            socket_id,
            cores: new.cores,
            threads: new.threads,
            tdp_watts: new.tdp_watts,
            supported_ram,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(cpu.clone()).await.map_err(storage_error)?;
        tracing::info!(id = %cpu.id, "CPU created");
        Ok(cpu)
    }

    pub async fn update(&self, id: Uuid, patch: CpuPatch) -> DomainResult<Cpu> {
        let mut cpu = self.get(id).await?;
        if let Some(name) = patch.name {
            cpu.name = normalized_name("name", &name)?;
        }
        if let Some(socket_id) = patch.socket_id {
            cpu.socket_id = resolve_dictionary_ref(
                self.sockets.as_ref(),
                EntityKind::Socket,
                "socket_id",
                Some(socket_id),
            )
            .await?;
        }
        if let Some(cores) = patch.cores {
            cpu.cores = cores;
        }
        if let Some(threads) = patch.threads {
            cpu.threads = threads;
        }
        if let Some(tdp_watts) = patch.tdp_watts {
            cpu.tdp_watts = tdp_watts;
        }
        if let Some(supported_ram) = patch.supported_ram {
            cpu.supported_ram = self.resolve_supported_ram(supported_ram).await?;
        }
        self.ensure_name_free(&cpu.name, Some(id)).await?;
        cpu.updated_at = Utc::now();
        self.repo.update(cpu.clone()).await.map_err(storage_error)?;
        Ok(cpu)
    }

    pub async fn replace(&self, id: Uuid, new: NewCpu) -> DomainResult<Cpu> {
        let mut cpu = self.get(id).await?;
        cpu.name = normalized_name("name", &new.name)?;
        cpu.socket_id = resolve_dictionary_ref(
            self.sockets.as_ref(),
            EntityKind::Socket,
            "socket_id",
            new.socket_id,
        )
        .await?;
        cpu.cores = new.cores;
        cpu.threads = new.threads;
        cpu.tdp_watts = new.tdp_watts;
        cpu.supported_ram = self.resolve_supported_ram(new.supported_ram).await?;
        self.ensure_name_free(&cpu.name, Some(id)).await?;
        cpu.updated_at = Utc::now();
        self.repo.update(cpu.clone()).await.map_err(storage_error)?;
        Ok(cpu)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if deleted {
            tracing::info!(id = %id, "CPU deleted");
        }
        Ok(())
    }

    /// The owned set must be non-empty; every referenced RAM type must be
    /// non-null and resolvable. Duplicate RAM types collapse to the first.
    async fn resolve_supported_ram(
        &self,
        refs: Vec<NewCpuRamType>,
    ) -> DomainResult<Vec<CpuRamType>> {
        if refs.is_empty() {
            return Err(DomainError::empty_collection("supported_ram"));
        }
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(refs.len());
        for entry in refs {
            let ram_type_id = resolve_dictionary_ref(
                self.ram_types.as_ref(),
                EntityKind::RamType,
                "supported_ram",
                entry.ram_type_id,
            )
            .await?;
            if !seen.insert(ram_type_id) {
                continue;
            }
            resolved.push(CpuRamType {
                ram_type_id,
                max_clock_mhz: entry.max_clock_mhz,
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
