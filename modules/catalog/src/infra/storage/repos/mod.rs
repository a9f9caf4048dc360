//! SeaORM repository implementations, one module per aggregate.

mod chipsets;
mod coolers;
mod cpu_power_connectors;
mod cpus;
mod fan_sizes;
mod fans;
mod gpus;
mod hdds;
mod psus;
mod ram_modules;
mod ssds;

pub use chipsets::SeaOrmChipsetsRepo;
pub use coolers::SeaOrmCoolersRepo;
pub use cpu_power_connectors::SeaOrmCpuPowerConnectorsRepo;
pub use cpus::SeaOrmCpusRepo;
pub use fan_sizes::SeaOrmFanSizesRepo;
pub use fans::SeaOrmFansRepo;
pub use gpus::SeaOrmGpusRepo;
pub use hdds::SeaOrmHddsRepo;
pub use psus::SeaOrmPsusRepo;
pub use ram_modules::SeaOrmRamModulesRepo;
pub use ssds::SeaOrmSsdsRepo;
