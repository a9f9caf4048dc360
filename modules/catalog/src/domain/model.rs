//! Domain models for catalog entities.
//!
//! Every entity comes in three shapes: the stored entity, a `New*` payload for
//! create/replace (foreign keys optional so a missing reference can be
//! reported by name), and a `*Patch` for partial updates (absent fields keep
//! their prior values).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== Plain name dictionaries ====================

/// A plain `{id, name}` dictionary row (socket, vendor, RAM type, form
/// factors, PSU certificate). The name is unique within its collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDictionaryEntry {
    pub id: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct DictionaryPatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySort {
    #[default]
    Name,
}

// ==================== Chipset ====================

/// Chipset under a socket; no two chipsets share a name under the same socket.
#[derive(Debug, Clone, PartialEq)]
pub struct Chipset {
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChipset {
    pub id: Option<Uuid>,
    pub name: String,
    pub socket_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ChipsetPatch {
    pub name: Option<String>,
    pub socket_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipsetSort {
    #[default]
    Name,
    SocketName,
}

// ==================== Fan size ====================

#[derive(Debug, Clone, PartialEq)]
pub struct FanSize {
    pub id: Uuid,
    pub size_mm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFanSize {
    pub id: Option<Uuid>,
    pub size_mm: i32,
}

#[derive(Debug, Clone, Default)]
pub struct FanSizePatch {
    pub size_mm: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanSizeSort {
    #[default]
    SizeMm,
}

// ==================== CPU power connector ====================

/// CPU power connector with the set of connectors it can substitute for.
/// The compatible set is an owned self-referential relation without payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuPowerConnector {
    pub id: Uuid,
    pub name: String,
    pub compatible: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCpuPowerConnector {
    pub id: Option<Uuid>,
    pub name: String,
    /// Elements are optional so a null element can be rejected by name.
    pub compatible: Vec<Option<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct CpuPowerConnectorPatch {
    pub name: Option<String>,
    pub compatible: Option<Vec<Option<Uuid>>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuPowerConnectorSort {
    #[default]
    Name,
}

// ==================== CPU ====================

/// Supported RAM type association carrying the maximum supported clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuRamType {
    pub ram_type_id: Uuid,
    pub max_clock_mhz: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewCpuRamType {
    pub ram_type_id: Option<Uuid>,
    pub max_clock_mhz: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cpu {
    pub id: Uuid,
    pub name: String,
    pub socket_id: Uuid,
    pub cores: i32,
    pub threads: i32,
    pub tdp_watts: i32,
    pub supported_ram: Vec<CpuRamType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCpu {
    pub id: Option<Uuid>,
    pub name: String,
    pub socket_id: Option<Uuid>,
    pub cores: i32,
    pub threads: i32,
    pub tdp_watts: i32,
    pub supported_ram: Vec<NewCpuRamType>,
}

#[derive(Debug, Clone, Default)]
pub struct CpuPatch {
    pub name: Option<String>,
    pub socket_id: Option<Uuid>,
    pub cores: Option<i32>,
    pub threads: Option<i32>,
    pub tdp_watts: Option<i32>,
    pub supported_ram: Option<Vec<NewCpuRamType>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuSort {
    #[default]
    Name,
    SocketName,
    TdpWatts,
}

// ==================== GPU ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Gpu {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub memory_gb: i32,
    pub tdp_watts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGpu {
    pub id: Option<Uuid>,
    pub name: String,
    pub vendor_id: Option<Uuid>,
    pub memory_gb: i32,
    pub tdp_watts: i32,
}

#[derive(Debug, Clone, Default)]
pub struct GpuPatch {
    pub name: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub memory_gb: Option<i32>,
    pub tdp_watts: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuSort {
    #[default]
    Name,
    VendorName,
}

// ==================== PSU ====================

/// CPU power connector association carrying how many of that connector the
/// PSU provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsuCpuConnector {
    pub connector_id: Uuid,
    pub count: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewPsuCpuConnector {
    pub connector_id: Option<Uuid>,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Psu {
    pub id: Uuid,
    pub name: String,
    pub wattage: i32,
    pub form_factor_id: Uuid,
    pub certificate_id: Uuid,
    pub cpu_connectors: Vec<PsuCpuConnector>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPsu {
    pub id: Option<Uuid>,
    pub name: String,
    pub wattage: i32,
    pub form_factor_id: Option<Uuid>,
    pub certificate_id: Option<Uuid>,
    pub cpu_connectors: Vec<NewPsuCpuConnector>,
}

#[derive(Debug, Clone, Default)]
pub struct PsuPatch {
    pub name: Option<String>,
    pub wattage: Option<i32>,
    pub form_factor_id: Option<Uuid>,
    pub certificate_id: Option<Uuid>,
    pub cpu_connectors: Option<Vec<NewPsuCpuConnector>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsuSort {
    #[default]
    Name,
    Wattage,
}

// ==================== RAM module ====================

/// RAM module identified by the composite key
/// `(clock_mhz, capacity_gb, ram_type_id, design)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RamModule {
    pub id: Uuid,
    pub clock_mhz: i32,
    pub capacity_gb: i32,
    pub ram_type_id: Uuid,
    pub design: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRamModule {
    pub id: Option<Uuid>,
    pub clock_mhz: i32,
    pub capacity_gb: i32,
    pub ram_type_id: Option<Uuid>,
    pub design: String,
}

#[derive(Debug, Clone, Default)]
pub struct RamModulePatch {
    pub clock_mhz: Option<i32>,
    pub capacity_gb: Option<i32>,
    pub ram_type_id: Option<Uuid>,
    pub design: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RamModuleSort {
    #[default]
    ClockMhz,
    CapacityGb,
    TypeName,
}

// ==================== Storage devices ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Ssd {
    pub id: Uuid,
    pub name: String,
    pub capacity_gb: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSsd {
    pub id: Option<Uuid>,
    pub name: String,
    pub capacity_gb: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SsdPatch {
    pub name: Option<String>,
    pub capacity_gb: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsdSort {
    #[default]
    Name,
    CapacityGb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hdd {
    pub id: Uuid,
    pub name: String,
    pub capacity_gb: i32,
    pub spindle_rpm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHdd {
    pub id: Option<Uuid>,
    pub name: String,
    pub capacity_gb: i32,
    pub spindle_rpm: i32,
}

#[derive(Debug, Clone, Default)]
pub struct HddPatch {
    pub name: Option<String>,
    pub capacity_gb: Option<i32>,
    pub spindle_rpm: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HddSort {
    #[default]
    Name,
    CapacityGb,
}

// ==================== Cooling ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Cooler {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub max_tdp_watts: i32,
    pub sockets: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCooler {
    pub id: Option<Uuid>,
    pub name: String,
    pub vendor_id: Option<Uuid>,
    pub max_tdp_watts: i32,
    pub sockets: Vec<Option<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct CoolerPatch {
    pub name: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub max_tdp_watts: Option<i32>,
    pub sockets: Option<Vec<Option<Uuid>>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolerSort {
    #[default]
    Name,
    MaxTdpWatts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fan {
    pub id: Uuid,
    pub name: String,
    pub size_id: Uuid,
    pub max_rpm: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFan {
    pub id: Option<Uuid>,
    pub name: String,
    pub size_id: Option<Uuid>,
    pub max_rpm: i32,
}

#[derive(Debug, Clone, Default)]
pub struct FanPatch {
    pub name: Option<String>,
    pub size_id: Option<Uuid>,
    pub max_rpm: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanSort {
    #[default]
    Name,
    SizeMm,
}
