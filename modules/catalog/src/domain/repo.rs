//! Repository ports consumed by the domain services.
//!
//! Implementations live in `infra::storage`. All methods are transactional at
//! the storage level; aggregate writes that touch owned join rows run inside
//! a single transaction in the implementation.
//!
//! Conflict lookups take an `exclude` id so update/replace can ignore the
//! row being rewritten.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::model::{
    Chipset, ChipsetSort, Cooler, CoolerSort, Cpu, CpuPowerConnector, CpuPowerConnectorSort,
    CpuSort, DictionaryEntry, DictionarySort, Fan, FanSize, FanSizeSort, FanSort, Gpu, GpuSort,
    Hdd, HddSort, Psu, PsuSort, RamModule, RamModuleSort, Ssd, SsdSort,
};
use crate::domain::page::{Page, PageRequest};

pub type RepoResult<T> = anyhow::Result<T>;

/// Port shared by every plain name dictionary (socket, vendor, RAM type,
/// motherboard form factor, PSU form factor, PSU certificate).
#[async_trait]
pub trait DictionaryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DictionaryEntry>>;
    async fn find_by_name(&self, name: &str, exclude: Option<Uuid>)
        -> RepoResult<Option<DictionaryEntry>>;
    async fn list(&self) -> RepoResult<Vec<DictionaryEntry>>;
    async fn list_page(&self, req: &PageRequest<DictionarySort>)
        -> RepoResult<Page<DictionaryEntry>>;
    async fn insert(&self, entry: DictionaryEntry) -> RepoResult<()>;
    async fn update(&self, entry: DictionaryEntry) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait ChipsetsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chipset>>;
    /// Lookup by the `(name, socket_id)` uniqueness key.
    async fn find_conflict(
        &self,
        name: &str,
        socket_id: Uuid,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Chipset>>;
    async fn list(&self) -> RepoResult<Vec<Chipset>>;
    async fn list_page(&self, req: &PageRequest<ChipsetSort>) -> RepoResult<Page<Chipset>>;
    async fn insert(&self, chipset: Chipset) -> RepoResult<()>;
    async fn update(&self, chipset: Chipset) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait FanSizesRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FanSize>>;
    async fn find_conflict(&self, size_mm: i32, exclude: Option<Uuid>)
        -> RepoResult<Option<FanSize>>;
    async fn list(&self) -> RepoResult<Vec<FanSize>>;
    async fn list_page(&self, req: &PageRequest<FanSizeSort>) -> RepoResult<Page<FanSize>>;
    async fn insert(&self, size: FanSize) -> RepoResult<()>;
    async fn update(&self, size: FanSize) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

/// CPU power connectors own their self-referential compatible set; insert and
/// update replace the owned rows all-or-nothing.
#[async_trait]
pub trait CpuPowerConnectorsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CpuPowerConnector>>;
    /// Names the relation through which other rows still reference this
    /// connector (`compatible` or `cpu_connectors`), if any. Rows owned by
    /// the connector itself do not count.
    async fn referenced_by(&self, id: Uuid) -> RepoResult<Option<&'static str>>;
    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>)
        -> RepoResult<Option<CpuPowerConnector>>;
    async fn list(&self) -> RepoResult<Vec<CpuPowerConnector>>;
    async fn list_page(
        &self,
        req: &PageRequest<CpuPowerConnectorSort>,
    ) -> RepoResult<Page<CpuPowerConnector>>;
    async fn insert(&self, connector: CpuPowerConnector) -> RepoResult<()>;
    async fn update(&self, connector: CpuPowerConnector) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait CpusRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cpu>>;
    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Cpu>>;
    async fn list(&self) -> RepoResult<Vec<Cpu>>;
    async fn list_page(&self, req: &PageRequest<CpuSort>) -> RepoResult<Page<Cpu>>;
    async fn insert(&self, cpu: Cpu) -> RepoResult<()>;
    async fn update(&self, cpu: Cpu) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait GpusRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gpu>>;
    async fn find_conflict(
        &self,
        name: &str,
        memory_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Gpu>>;
    async fn list(&self) -> RepoResult<Vec<Gpu>>;
    async fn list_page(&self, req: &PageRequest<GpuSort>) -> RepoResult<Page<Gpu>>;
    async fn insert(&self, gpu: Gpu) -> RepoResult<()>;
    async fn update(&self, gpu: Gpu) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait PsusRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Psu>>;
    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Psu>>;
    async fn list(&self) -> RepoResult<Vec<Psu>>;
    async fn list_page(&self, req: &PageRequest<PsuSort>) -> RepoResult<Page<Psu>>;
    async fn insert(&self, psu: Psu) -> RepoResult<()>;
    async fn update(&self, psu: Psu) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait RamModulesRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<RamModule>>;
    /// Lookup by the `(clock_mhz, capacity_gb, ram_type_id, design)` key.
    async fn find_conflict(
        &self,
        clock_mhz: i32,
        capacity_gb: i32,
        ram_type_id: Uuid,
        design: &str,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<RamModule>>;
    async fn list(&self) -> RepoResult<Vec<RamModule>>;
    async fn list_page(&self, req: &PageRequest<RamModuleSort>) -> RepoResult<Page<RamModule>>;
    async fn insert(&self, module: RamModule) -> RepoResult<()>;
    async fn update(&self, module: RamModule) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait SsdsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Ssd>>;
    async fn find_conflict(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Ssd>>;
    async fn list(&self) -> RepoResult<Vec<Ssd>>;
    async fn list_page(&self, req: &PageRequest<SsdSort>) -> RepoResult<Page<Ssd>>;
    async fn insert(&self, ssd: Ssd) -> RepoResult<()>;
    async fn update(&self, ssd: Ssd) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait HddsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Hdd>>;
    async fn find_conflict(
        &self,
        name: &str,
        capacity_gb: i32,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Hdd>>;
    async fn list(&self) -> RepoResult<Vec<Hdd>>;
    async fn list_page(&self, req: &PageRequest<HddSort>) -> RepoResult<Page<Hdd>>;
    async fn insert(&self, hdd: Hdd) -> RepoResult<()>;
    async fn update(&self, hdd: Hdd) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait CoolersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cooler>>;
    async fn find_conflict(&self, name: &str, exclude: Option<Uuid>) -> RepoResult<Option<Cooler>>;
    async fn list(&self) -> RepoResult<Vec<Cooler>>;
    async fn list_page(&self, req: &PageRequest<CoolerSort>) -> RepoResult<Page<Cooler>>;
    async fn insert(&self, cooler: Cooler) -> RepoResult<()>;
    async fn update(&self, cooler: Cooler) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait FansRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Fan>>;
    async fn find_conflict(
        &self,
        name: &str,
        size_id: Uuid,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<Fan>>;
    async fn list(&self) -> RepoResult<Vec<Fan>>;
    async fn list_page(&self, req: &PageRequest<FanSort>) -> RepoResult<Page<Fan>>;
    async fn insert(&self, fan: Fan) -> RepoResult<()>;
    async fn update(&self, fan: Fan) -> RepoResult<()>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}
