//! SeaORM entity definitions, one module per table.

pub mod chipset;
pub mod cooler;
pub mod cooler_socket;
pub mod cpu;
pub mod cpu_power_connector;
pub mod cpu_power_connector_compat;
pub mod cpu_ram_type;
pub mod fan;
pub mod fan_size;
pub mod gpu;
pub mod hdd;
pub mod motherboard_form_factor;
pub mod psu;
pub mod psu_certificate;
pub mod psu_cpu_connector;
pub mod psu_form_factor;
pub mod ram_module;
pub mod ram_type;
pub mod socket;
pub mod ssd;
pub mod vendor;
