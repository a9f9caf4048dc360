//! Wiring: SeaORM repositories behind the domain ports, services on top.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::error::EntityKind;
use crate::domain::page::LimitCfg;
use crate::domain::repo::{
    CpuPowerConnectorsRepository, DictionaryRepository, FanSizesRepository,
};
use crate::domain::service::{
    ChipsetsService, CoolersService, CpuPowerConnectorsService, CpusService, DictionaryService,
    FanSizesService, FansService, GpusService, HddsService, PsusService, RamModulesService,
    SsdsService,
};
use crate::infra::storage::dictionary_repo::SeaOrmDictionaryRepo;
use crate::infra::storage::entity;
use crate::infra::storage::repos::{
    SeaOrmChipsetsRepo, SeaOrmCoolersRepo, SeaOrmCpuPowerConnectorsRepo, SeaOrmCpusRepo,
    SeaOrmFanSizesRepo, SeaOrmFansRepo, SeaOrmGpusRepo, SeaOrmHddsRepo, SeaOrmPsusRepo,
    SeaOrmRamModulesRepo, SeaOrmSsdsRepo,
};

/// Shared handler state: one service per collection.
#[derive(Clone)]
pub struct AppState {
    pub sockets: Arc<DictionaryService>,
    pub vendors: Arc<DictionaryService>,
    pub ram_types: Arc<DictionaryService>,
    pub motherboard_form_factors: Arc<DictionaryService>,
    pub psu_form_factors: Arc<DictionaryService>,
    pub psu_certificates: Arc<DictionaryService>,
    pub chipsets: Arc<ChipsetsService>,
    pub fan_sizes: Arc<FanSizesService>,
    pub cpu_power_connectors: Arc<CpuPowerConnectorsService>,
    pub cpus: Arc<CpusService>,
    pub gpus: Arc<GpusService>,
    pub psus: Arc<PsusService>,
    pub ram_modules: Arc<RamModulesService>,
    pub ssds: Arc<SsdsService>,
    pub hdds: Arc<HddsService>,
    pub coolers: Arc<CoolersService>,
    pub fans: Arc<FansService>,
}

/// Builds the full service graph over one database connection.
pub fn build_state(db: DatabaseConnection, limits: LimitCfg) -> AppState {
    let sockets_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::socket::Entity,
    >::new(db.clone(), limits));
    let vendors_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::vendor::Entity,
    >::new(db.clone(), limits));
    let ram_types_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::ram_type::Entity,
    >::new(db.clone(), limits));
    let motherboard_ff_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::motherboard_form_factor::Entity,
    >::new(db.clone(), limits));
    let psu_ff_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::psu_form_factor::Entity,
    >::new(db.clone(), limits));
    let psu_cert_repo: Arc<dyn DictionaryRepository> = Arc::new(SeaOrmDictionaryRepo::<
        entity::psu_certificate::Entity,
    >::new(db.clone(), limits));

    let fan_sizes_repo: Arc<dyn FanSizesRepository> =
        Arc::new(SeaOrmFanSizesRepo::new(db.clone(), limits));
    let connectors_repo: Arc<dyn CpuPowerConnectorsRepository> =
        Arc::new(SeaOrmCpuPowerConnectorsRepo::new(db.clone(), limits));

    AppState {
        sockets: Arc::new(DictionaryService::new(
            EntityKind::Socket,
            sockets_repo.clone(),
        )),
        vendors: Arc::new(DictionaryService::new(
            EntityKind::Vendor,
            vendors_repo.clone(),
        )),
        ram_types: Arc::new(DictionaryService::new(
            EntityKind::RamType,
            ram_types_repo.clone(),
        )),
        motherboard_form_factors: Arc::new(DictionaryService::new(
            EntityKind::MotherboardFormFactor,
            motherboard_ff_repo,
        )),
        psu_form_factors: Arc::new(DictionaryService::new(
            EntityKind::PsuFormFactor,
            psu_ff_repo.clone(),
        )),
        psu_certificates: Arc::new(DictionaryService::new(
            EntityKind::PsuCertificate,
            psu_cert_repo.clone(),
        )),
        chipsets: Arc::new(ChipsetsService::new(
            Arc::new(SeaOrmChipsetsRepo::new(db.clone(), limits)),
            sockets_repo.clone(),
        )),
        fan_sizes: Arc::new(FanSizesService::new(fan_sizes_repo.clone())),
        cpu_power_connectors: Arc::new(CpuPowerConnectorsService::new(connectors_repo.clone())),
        cpus: Arc::new(CpusService::new(
            Arc::new(SeaOrmCpusRepo::new(db.clone(), limits)),
            sockets_repo.clone(),
            ram_types_repo.clone(),
        )),
        gpus: Arc::new(GpusService::new(
            Arc::new(SeaOrmGpusRepo::new(db.clone(), limits)),
            vendors_repo.clone(),
        )),
        psus: Arc::new(PsusService::new(
            Arc::new(SeaOrmPsusRepo::new(db.clone(), limits)),
            psu_ff_repo,
            psu_cert_repo,
            connectors_repo,
        )),
        ram_modules: Arc::new(RamModulesService::new(
            Arc::new(SeaOrmRamModulesRepo::new(db.clone(), limits)),
            ram_types_repo,
        )),
        ssds: Arc::new(SsdsService::new(Arc::new(SeaOrmSsdsRepo::new(
            db.clone(),
            limits,
        )))),
        hdds: Arc::new(HddsService::new(Arc::new(SeaOrmHddsRepo::new(
            db.clone(),
            limits,
        )))),
        coolers: Arc::new(CoolersService::new(
            Arc::new(SeaOrmCoolersRepo::new(db.clone(), limits)),
            vendors_repo,
            sockets_repo,
        )),
        fans: Arc::new(FansService::new(
            Arc::new(SeaOrmFansRepo::new(db, limits)),
            fan_sizes_repo,
        )),
    }
}
