//! Wire DTOs and their conversions to and from domain models.
//!
//! Create/replace bodies keep reference fields optional so a null or missing
//! id reaches the service and is rejected by name instead of failing JSON
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::model::{
    Chipset, ChipsetPatch, Cooler, CoolerPatch, Cpu, CpuPowerConnector, CpuPowerConnectorPatch,
    CpuPatch, CpuRamType, DictionaryEntry, DictionaryPatch, Fan, FanPatch, FanSize, FanSizePatch,
    Gpu, GpuPatch, Hdd, HddPatch, NewChipset, NewCooler, NewCpu, NewCpuPowerConnector,
    NewCpuRamType, NewDictionaryEntry, NewFan, NewFanSize, NewGpu, NewHdd, NewPsu,
    NewPsuCpuConnector, NewRamModule, NewSsd, Psu, PsuCpuConnector, PsuPatch, RamModule,
    RamModulePatch, Ssd, SsdPatch,
};
use crate::domain::page::{Page, PageRequest, SortDir};

// ==================== Paging ====================

/// Query parameters shared by every collection listing. A request without
/// any of them returns the full collection as a plain array.
#[derive(Debug, Deserialize)]
pub struct PageParams<S> {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sort: Option<S>,
    pub dir: Option<SortDir>,
}

impl<S: Default + Copy> PageParams<S> {
    pub fn is_paged(&self) -> bool {
        self.limit.is_some() || self.offset.is_some() || self.sort.is_some() || self.dir.is_some()
    }

    pub fn to_request(&self) -> PageRequest<S> {
        PageRequest {
            limit: self.limit,
            offset: self.offset.unwrap_or(0),
            sort: self.sort.unwrap_or_default(),
            dir: self.dir.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            has_more: page.has_more,
        }
    }
}

// ==================== Plain name dictionaries ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DictionaryDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DictionaryEntry> for DictionaryDto {
    fn from(e: DictionaryEntry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDictionaryBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
}

impl From<CreateDictionaryBody> for NewDictionaryEntry {
    fn from(b: CreateDictionaryBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchDictionaryBody {
    pub name: Option<String>,
}

impl From<PatchDictionaryBody> for DictionaryPatch {
    fn from(b: PatchDictionaryBody) -> Self {
        Self { name: b.name }
    }
}

// ==================== Chipsets ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChipsetDto {
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Chipset> for ChipsetDto {
    fn from(c: Chipset) -> Self {
        Self {
            id: c.id,
            name: c.name,
            socket_id: c.socket_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateChipsetBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub socket_id: Option<Uuid>,
}

impl From<CreateChipsetBody> for NewChipset {
    fn from(b: CreateChipsetBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            socket_id: b.socket_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchChipsetBody {
    pub name: Option<String>,
    pub socket_id: Option<Uuid>,
}

impl From<PatchChipsetBody> for ChipsetPatch {
    fn from(b: PatchChipsetBody) -> Self {
        Self {
            name: b.name,
            socket_id: b.socket_id,
        }
    }
}

// ==================== Fan sizes ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FanSizeDto {
    pub id: Uuid,
    pub size_mm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FanSize> for FanSizeDto {
    fn from(s: FanSize) -> Self {
        Self {
            id: s.id,
            size_mm: s.size_mm,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFanSizeBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub size_mm: i32,
}

impl From<CreateFanSizeBody> for NewFanSize {
    fn from(b: CreateFanSizeBody) -> Self {
        Self {
            id: b.id,
            size_mm: b.size_mm,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchFanSizeBody {
    pub size_mm: Option<i32>,
}

impl From<PatchFanSizeBody> for FanSizePatch {
    fn from(b: PatchFanSizeBody) -> Self {
        Self { size_mm: b.size_mm }
    }
}

// ==================== CPU power connectors ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CpuPowerConnectorDto {
    pub id: Uuid,
    pub name: String,
    pub compatible: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CpuPowerConnector> for CpuPowerConnectorDto {
    fn from(c: CpuPowerConnector) -> Self {
        Self {
            id: c.id,
            name: c.name,
            compatible: c.compatible,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCpuPowerConnectorBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub compatible: Vec<Option<Uuid>>,
}

impl From<CreateCpuPowerConnectorBody> for NewCpuPowerConnector {
    fn from(b: CreateCpuPowerConnectorBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            compatible: b.compatible,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchCpuPowerConnectorBody {
    pub name: Option<String>,
    pub compatible: Option<Vec<Option<Uuid>>>,
}

impl From<PatchCpuPowerConnectorBody> for CpuPowerConnectorPatch {
    fn from(b: PatchCpuPowerConnectorBody) -> Self {
        Self {
            name: b.name,
            compatible: b.compatible,
        }
    }
}

// ==================== CPUs ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CpuRamTypeDto {
    pub ram_type_id: Uuid,
    pub max_clock_mhz: i32,
}

impl From<CpuRamType> for CpuRamTypeDto {
    fn from(r: CpuRamType) -> Self {
        Self {
            ram_type_id: r.ram_type_id,
            max_clock_mhz: r.max_clock_mhz,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CpuRamTypeBody {
    #[serde(default)]
    pub ram_type_id: Option<Uuid>,
    pub max_clock_mhz: i32,
}

impl From<CpuRamTypeBody> for NewCpuRamType {
    fn from(b: CpuRamTypeBody) -> Self {
        Self {
            ram_type_id: b.ram_type_id,
            max_clock_mhz: b.max_clock_mhz,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CpuDto {
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub cores: i32,
    pub threads: i32,
    pub tdp_watts: i32,
    pub supported_ram: Vec<CpuRamTypeDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cpu> for CpuDto {
    fn from(c: Cpu) -> Self {
        Self {
            id: c.id,
            name: c.name,
            socket_id: c.socket_id,
            cores: c.cores,
            threads: c.threads,
            tdp_watts: c.tdp_watts,
            supported_ram: c.supported_ram.into_iter().map(Into::into).collect(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCpuBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub socket_id: Option<Uuid>,
    pub cores: i32,
    pub threads: i32,
    pub tdp_watts: i32,
    #[serde(default)]
    pub supported_ram: Vec<CpuRamTypeBody>,
}

impl From<CreateCpuBody> for NewCpu {
    fn from(b: CreateCpuBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            socket_id: b.socket_id,
            cores: b.cores,
            threads: b.threads,
            tdp_watts: b.tdp_watts,
            supported_ram: b.supported_ram.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchCpuBody {
    pub name: Option<String>,
    pub socket_id: Option<Uuid>,
    pub cores: Option<i32>,
    pub threads: Option<i32>,
    pub tdp_watts: Option<i32>,
    pub supported_ram: Option<Vec<CpuRamTypeBody>>,
}

impl From<PatchCpuBody> for CpuPatch {
    fn from(b: PatchCpuBody) -> Self {
        Self {
            name: b.name,
            socket_id: b.socket_id,
            cores: b.cores,
            threads: b.threads,
            tdp_watts: b.tdp_watts,
            supported_ram: b
                .supported_ram
                .map(|rs| rs.into_iter().map(Into::into).collect()),
        }
    }
}

// ==================== GPUs ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GpuDto {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub memory_gb: i32,
    pub tdp_watts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Gpu> for GpuDto {
    fn from(g: Gpu) -> Self {
        Self {
            id: g.id,
            name: g.name,
            vendor_id: g.vendor_id,
            memory_gb: g.memory_gb,
            tdp_watts: g.tdp_watts,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGpuBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub vendor_id: Option<Uuid>,
    pub memory_gb: i32,
    pub tdp_watts: i32,
}

impl From<CreateGpuBody> for NewGpu {
    fn from(b: CreateGpuBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            vendor_id: b.vendor_id,
            memory_gb: b.memory_gb,
            tdp_watts: b.tdp_watts,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchGpuBody {
    pub name: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub memory_gb: Option<i32>,
    pub tdp_watts: Option<i32>,
}

impl From<PatchGpuBody> for GpuPatch {
    fn from(b: PatchGpuBody) -> Self {
        Self {
            name: b.name,
            vendor_id: b.vendor_id,
            memory_gb: b.memory_gb,
            tdp_watts: b.tdp_watts,
        }
    }
}

// ==================== PSUs ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PsuCpuConnectorDto {
    pub connector_id: Uuid,
    pub count: i32,
}

impl From<PsuCpuConnector> for PsuCpuConnectorDto {
    fn from(c: PsuCpuConnector) -> Self {
        Self {
            connector_id: c.connector_id,
            count: c.count,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PsuCpuConnectorBody {
    #[serde(default)]
    pub connector_id: Option<Uuid>,
    pub count: i32,
}

impl From<PsuCpuConnectorBody> for NewPsuCpuConnector {
    fn from(b: PsuCpuConnectorBody) -> Self {
        Self {
            connector_id: b.connector_id,
            count: b.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PsuDto {
    pub id: Uuid,
    pub name: String,
    pub wattage: i32,
    pub form_factor_id: Uuid,
    pub certificate_id: Uuid,
    pub cpu_connectors: Vec<PsuCpuConnectorDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Psu> for PsuDto {
    fn from(p: Psu) -> Self {
        Self {
            id: p.id,
            name: p.name,
            wattage: p.wattage,
            form_factor_id: p.form_factor_id,
            certificate_id: p.certificate_id,
            cpu_connectors: p.cpu_connectors.into_iter().map(Into::into).collect(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePsuBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub wattage: i32,
    #[serde(default)]
    pub form_factor_id: Option<Uuid>,
    #[serde(default)]
    pub certificate_id: Option<Uuid>,
    #[serde(default)]
    pub cpu_connectors: Vec<PsuCpuConnectorBody>,
}

impl From<CreatePsuBody> for NewPsu {
    fn from(b: CreatePsuBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            wattage: b.wattage,
            form_factor_id: b.form_factor_id,
            certificate_id: b.certificate_id,
            cpu_connectors: b.cpu_connectors.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchPsuBody {
    pub name: Option<String>,
    pub wattage: Option<i32>,
    pub form_factor_id: Option<Uuid>,
    pub certificate_id: Option<Uuid>,
    pub cpu_connectors: Option<Vec<PsuCpuConnectorBody>>,
}

impl From<PatchPsuBody> for PsuPatch {
    fn from(b: PatchPsuBody) -> Self {
        Self {
            name: b.name,
            wattage: b.wattage,
            form_factor_id: b.form_factor_id,
            certificate_id: b.certificate_id,
            cpu_connectors: b
                .cpu_connectors
                .map(|cs| cs.into_iter().map(Into::into).collect()),
        }
    }
}

// ==================== RAM modules ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RamModuleDto {
    pub id: Uuid,
    pub clock_mhz: i32,
    pub capacity_gb: i32,
    pub ram_type_id: Uuid,
    pub design: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RamModule> for RamModuleDto {
    fn from(m: RamModule) -> Self {
        Self {
            id: m.id,
            clock_mhz: m.clock_mhz,
            capacity_gb: m.capacity_gb,
            ram_type_id: m.ram_type_id,
            design: m.design,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRamModuleBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub clock_mhz: i32,
    pub capacity_gb: i32,
    #[serde(default)]
    pub ram_type_id: Option<Uuid>,
    pub design: String,
}

impl From<CreateRamModuleBody> for NewRamModule {
    fn from(b: CreateRamModuleBody) -> Self {
        Self {
            id: b.id,
            clock_mhz: b.clock_mhz,
            capacity_gb: b.capacity_gb,
            ram_type_id: b.ram_type_id,
            design: b.design,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchRamModuleBody {
    pub clock_mhz: Option<i32>,
    pub capacity_gb: Option<i32>,
    pub ram_type_id: Option<Uuid>,
    pub design: Option<String>,
}

impl From<PatchRamModuleBody> for RamModulePatch {
    fn from(b: PatchRamModuleBody) -> Self {
        Self {
            clock_mhz: b.clock_mhz,
            capacity_gb: b.capacity_gb,
            ram_type_id: b.ram_type_id,
            design: b.design,
        }
    }
}

// ==================== Storage devices ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SsdDto {
    pub id: Uuid,
    pub name: String,
    pub capacity_gb: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ssd> for SsdDto {
    fn from(s: Ssd) -> Self {
        Self {
            id: s.id,
            name: s.name,
            capacity_gb: s.capacity_gb,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSsdBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub capacity_gb: i32,
}

impl From<CreateSsdBody> for NewSsd {
    fn from(b: CreateSsdBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            capacity_gb: b.capacity_gb,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchSsdBody {
    pub name: Option<String>,
    pub capacity_gb: Option<i32>,
}

impl From<PatchSsdBody> for SsdPatch {
    fn from(b: PatchSsdBody) -> Self {
        Self {
            name: b.name,
            capacity_gb: b.capacity_gb,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HddDto {
    pub id: Uuid,
    pub name: String,
    pub capacity_gb: i32,
    pub spindle_rpm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hdd> for HddDto {
    fn from(h: Hdd) -> Self {
        Self {
            id: h.id,
            name: h.name,
            capacity_gb: h.capacity_gb,
            spindle_rpm: h.spindle_rpm,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHddBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub capacity_gb: i32,
    pub spindle_rpm: i32,
}

impl From<CreateHddBody> for NewHdd {
    fn from(b: CreateHddBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            capacity_gb: b.capacity_gb,
            spindle_rpm: b.spindle_rpm,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchHddBody {
    pub name: Option<String>,
    pub capacity_gb: Option<i32>,
    pub spindle_rpm: Option<i32>,
}

impl From<PatchHddBody> for HddPatch {
    fn from(b: PatchHddBody) -> Self {
        Self {
            name: b.name,
            capacity_gb: b.capacity_gb,
            spindle_rpm: b.spindle_rpm,
        }
    }
}

// ==================== Cooling ====================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoolerDto {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub max_tdp_watts: i32,
    pub sockets: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cooler> for CoolerDto {
    fn from(c: Cooler) -> Self {
        Self {
            id: c.id,
            name: c.name,
            vendor_id: c.vendor_id,
            max_tdp_watts: c.max_tdp_watts,
            sockets: c.sockets,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCoolerBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub vendor_id: Option<Uuid>,
    pub max_tdp_watts: i32,
    #[serde(default)]
    pub sockets: Vec<Option<Uuid>>,
}

impl From<CreateCoolerBody> for NewCooler {
    fn from(b: CreateCoolerBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            vendor_id: b.vendor_id,
            max_tdp_watts: b.max_tdp_watts,
            sockets: b.sockets,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchCoolerBody {
    pub name: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub max_tdp_watts: Option<i32>,
    pub sockets: Option<Vec<Option<Uuid>>>,
}

impl From<PatchCoolerBody> for CoolerPatch {
    fn from(b: PatchCoolerBody) -> Self {
        Self {
            name: b.name,
            vendor_id: b.vendor_id,
            max_tdp_watts: b.max_tdp_watts,
            sockets: b.sockets,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FanDto {
    pub id: Uuid,
    pub name: String,
    pub size_id: Uuid,
    pub max_rpm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Fan> for FanDto {
    fn from(f: Fan) -> Self {
        Self {
            id: f.id,
            name: f.name,
            size_id: f.size_id,
            max_rpm: f.max_rpm,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFanBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub size_id: Option<Uuid>,
    pub max_rpm: i32,
}

impl From<CreateFanBody> for NewFan {
    fn from(b: CreateFanBody) -> Self {
        Self {
            id: b.id,
            name: b.name,
            size_id: b.size_id,
            max_rpm: b.max_rpm,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchFanBody {
    pub name: Option<String>,
    pub size_id: Option<Uuid>,
    pub max_rpm: Option<i32>,
}

impl From<PatchFanBody> for FanPatch {
    fn from(b: PatchFanBody) -> Self {
        Self {
            name: b.name,
            size_id: b.size_id,
            max_rpm: b.max_rpm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_accepts_null_reference() {
        let body: CreateChipsetBody =
            serde_json::from_str(r#"{"name": "Z790", "socket_id": null}"#).unwrap();
        assert!(body.socket_id.is_none());
        let new: NewChipset = body.into();
        assert_eq!(new.name, "Z790");
    }

    #[test]
    fn create_body_accepts_missing_collection() {
        let body: CreatePsuBody =
            serde_json::from_str(r#"{"name": "RM850x", "wattage": 850}"#).unwrap();
        assert!(body.cpu_connectors.is_empty());
    }

    #[test]
    fn null_collection_element_survives_deserialization() {
        let body: CreateCoolerBody = serde_json::from_str(
            r#"{"name": "NH-D15", "max_tdp_watts": 220, "sockets": [null]}"#,
        )
        .unwrap();
        assert_eq!(body.sockets, vec![None]);
    }
}
