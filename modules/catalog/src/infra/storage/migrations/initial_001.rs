//! Initial schema: dictionary tables, component tables, owned join tables.
//!
//! Uniqueness keys get unique indexes so racing writers that pass the service
//! pre-check are still serialized by the store. Join tables cascade with
//! their owner; dictionary references are restricted.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Standard shape shared by the plain name dictionaries.
fn dictionary_table<E: Iden + Copy + 'static>(
    table: E,
    id: E,
    name: E,
    created_at: E,
    updated_at: E,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(id).uuid().not_null().primary_key())
        .col(ColumnDef::new(name).string().not_null())
        .col(
            ColumnDef::new(created_at)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(updated_at)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn unique_index<E: Iden + Copy + 'static>(name: &str, table: E, cols: &[E]) -> IndexCreateStatement {
    let mut idx = Index::create();
    idx.name(name).table(table).unique().if_not_exists();
    for col in cols {
        idx.col(*col);
    }
    idx.to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Plain name dictionaries
        manager
            .create_table(dictionary_table(
                Sockets::Table,
                Sockets::Id,
                Sockets::Name,
                Sockets::CreatedAt,
                Sockets::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_sockets_name",
                Sockets::Table,
                &[Sockets::Name],
            ))
            .await?;

        manager
            .create_table(dictionary_table(
                Vendors::Table,
                Vendors::Id,
                Vendors::Name,
                Vendors::CreatedAt,
                Vendors::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_vendors_name",
                Vendors::Table,
                &[Vendors::Name],
            ))
            .await?;

        manager
            .create_table(dictionary_table(
                RamTypes::Table,
                RamTypes::Id,
                RamTypes::Name,
                RamTypes::CreatedAt,
                RamTypes::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_ram_types_name",
                RamTypes::Table,
                &[RamTypes::Name],
            ))
            .await?;

        manager
            .create_table(dictionary_table(
                MotherboardFormFactors::Table,
                MotherboardFormFactors::Id,
                MotherboardFormFactors::Name,
                MotherboardFormFactors::CreatedAt,
                MotherboardFormFactors::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_motherboard_form_factors_name",
                MotherboardFormFactors::Table,
                &[MotherboardFormFactors::Name],
            ))
            .await?;

        manager
            .create_table(dictionary_table(
                PsuFormFactors::Table,
                PsuFormFactors::Id,
                PsuFormFactors::Name,
                PsuFormFactors::CreatedAt,
                PsuFormFactors::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_psu_form_factors_name",
                PsuFormFactors::Table,
                &[PsuFormFactors::Name],
            ))
            .await?;

        manager
            .create_table(dictionary_table(
                PsuCertificates::Table,
                PsuCertificates::Id,
                PsuCertificates::Name,
                PsuCertificates::CreatedAt,
                PsuCertificates::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_psu_certificates_name",
                PsuCertificates::Table,
                &[PsuCertificates::Name],
            ))
            .await?;

        // Chipsets: unique name under a socket
        manager
            .create_table(
                Table::create()
                    .table(Chipsets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chipsets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chipsets::Name).string().not_null())
                    .col(ColumnDef::new(Chipsets::SocketId).uuid().not_null())
                    .col(
                        ColumnDef::new(Chipsets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Chipsets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chipsets_socket")
                            .from(Chipsets::Table, Chipsets::SocketId)
                            .to(Sockets::Table, Sockets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_chipsets_name_socket",
                Chipsets::Table,
                &[Chipsets::Name, Chipsets::SocketId],
            ))
            .await?;

        // Fan sizes
        manager
            .create_table(
                Table::create()
                    .table(FanSizes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FanSizes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FanSizes::SizeMm).integer().not_null())
                    .col(
                        ColumnDef::new(FanSizes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FanSizes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_fan_sizes_size_mm",
                FanSizes::Table,
                &[FanSizes::SizeMm],
            ))
            .await?;

        // CPU power connectors and their compatible set
        manager
            .create_table(dictionary_table(
                CpuPowerConnectors::Table,
                CpuPowerConnectors::Id,
                CpuPowerConnectors::Name,
                CpuPowerConnectors::CreatedAt,
                CpuPowerConnectors::UpdatedAt,
            ))
            .await?;
        manager
            .create_index(unique_index(
                "ux_cpu_power_connectors_name",
                CpuPowerConnectors::Table,
                &[CpuPowerConnectors::Name],
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CpuPowerConnectorCompat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CpuPowerConnectorCompat::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CpuPowerConnectorCompat::ConnectorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CpuPowerConnectorCompat::CompatibleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CpuPowerConnectorCompat::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cpc_compat_owner")
                            .from(
                                CpuPowerConnectorCompat::Table,
                                CpuPowerConnectorCompat::ConnectorId,
                            )
                            .to(CpuPowerConnectors::Table, CpuPowerConnectors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cpc_compat_ref")
                            .from(
                                CpuPowerConnectorCompat::Table,
                                CpuPowerConnectorCompat::CompatibleId,
                            )
                            .to(CpuPowerConnectors::Table, CpuPowerConnectors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_cpc_compat_pair",
                CpuPowerConnectorCompat::Table,
                &[
                    CpuPowerConnectorCompat::ConnectorId,
                    CpuPowerConnectorCompat::CompatibleId,
                ],
            ))
            .await?;

        // CPUs and supported RAM types
        manager
            .create_table(
                Table::create()
                    .table(Cpus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cpus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cpus::Name).string().not_null())
                    .col(ColumnDef::new(Cpus::SocketId).uuid().not_null())
                    .col(ColumnDef::new(Cpus::Cores).integer().not_null())
                    .col(ColumnDef::new(Cpus::Threads).integer().not_null())
                    .col(ColumnDef::new(Cpus::TdpWatts).integer().not_null())
                    .col(
                        ColumnDef::new(Cpus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cpus::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cpus_socket")
                            .from(Cpus::Table, Cpus::SocketId)
                            .to(Sockets::Table, Sockets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index("ux_cpus_name", Cpus::Table, &[Cpus::Name]))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CpuRamTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CpuRamTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CpuRamTypes::CpuId).uuid().not_null())
                    .col(ColumnDef::new(CpuRamTypes::RamTypeId).uuid().not_null())
                    .col(ColumnDef::new(CpuRamTypes::MaxClockMhz).integer().not_null())
                    .col(
                        ColumnDef::new(CpuRamTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cpu_ram_types_cpu")
                            .from(CpuRamTypes::Table, CpuRamTypes::CpuId)
                            .to(Cpus::Table, Cpus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cpu_ram_types_ram_type")
                            .from(CpuRamTypes::Table, CpuRamTypes::RamTypeId)
                            .to(RamTypes::Table, RamTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_cpu_ram_types_pair",
                CpuRamTypes::Table,
                &[CpuRamTypes::CpuId, CpuRamTypes::RamTypeId],
            ))
            .await?;

        // GPUs
        manager
            .create_table(
                Table::create()
                    .table(Gpus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gpus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gpus::Name).string().not_null())
                    .col(ColumnDef::new(Gpus::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Gpus::MemoryGb).integer().not_null())
                    .col(ColumnDef::new(Gpus::TdpWatts).integer().not_null())
                    .col(
                        ColumnDef::new(Gpus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gpus::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gpus_vendor")
                            .from(Gpus::Table, Gpus::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_gpus_name_memory",
                Gpus::Table,
                &[Gpus::Name, Gpus::MemoryGb],
            ))
            .await?;

        // PSUs and provided CPU power connectors
        manager
            .create_table(
                Table::create()
                    .table(Psus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Psus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Psus::Name).string().not_null())
                    .col(ColumnDef::new(Psus::Wattage).integer().not_null())
                    .col(ColumnDef::new(Psus::FormFactorId).uuid().not_null())
                    .col(ColumnDef::new(Psus::CertificateId).uuid().not_null())
                    .col(
                        ColumnDef::new(Psus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Psus::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_psus_form_factor")
                            .from(Psus::Table, Psus::FormFactorId)
                            .to(PsuFormFactors::Table, PsuFormFactors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_psus_certificate")
                            .from(Psus::Table, Psus::CertificateId)
                            .to(PsuCertificates::Table, PsuCertificates::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index("ux_psus_name", Psus::Table, &[Psus::Name]))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PsuCpuConnectors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PsuCpuConnectors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PsuCpuConnectors::PsuId).uuid().not_null())
                    .col(
                        ColumnDef::new(PsuCpuConnectors::ConnectorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PsuCpuConnectors::Count).integer().not_null())
                    .col(
                        ColumnDef::new(PsuCpuConnectors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_psu_cpu_connectors_psu")
                            .from(PsuCpuConnectors::Table, PsuCpuConnectors::PsuId)
                            .to(Psus::Table, Psus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_psu_cpu_connectors_connector")
                            .from(PsuCpuConnectors::Table, PsuCpuConnectors::ConnectorId)
                            .to(CpuPowerConnectors::Table, CpuPowerConnectors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_psu_cpu_connectors_pair",
                PsuCpuConnectors::Table,
                &[PsuCpuConnectors::PsuId, PsuCpuConnectors::ConnectorId],
            ))
            .await?;

        // RAM modules
        manager
            .create_table(
                Table::create()
                    .table(RamModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RamModules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RamModules::ClockMhz).integer().not_null())
                    .col(ColumnDef::new(RamModules::CapacityGb).integer().not_null())
                    .col(ColumnDef::new(RamModules::RamTypeId).uuid().not_null())
                    .col(ColumnDef::new(RamModules::Design).string().not_null())
                    .col(
                        ColumnDef::new(RamModules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RamModules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ram_modules_ram_type")
                            .from(RamModules::Table, RamModules::RamTypeId)
                            .to(RamTypes::Table, RamTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_ram_modules_key",
                RamModules::Table,
                &[
                    RamModules::ClockMhz,
                    RamModules::CapacityGb,
                    RamModules::RamTypeId,
                    RamModules::Design,
                ],
            ))
            .await?;

        // Storage devices
        manager
            .create_table(
                Table::create()
                    .table(Ssds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ssds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ssds::Name).string().not_null())
                    .col(ColumnDef::new(Ssds::CapacityGb).integer().not_null())
                    .col(
                        ColumnDef::new(Ssds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Ssds::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_ssds_name_capacity",
                Ssds::Table,
                &[Ssds::Name, Ssds::CapacityGb],
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hdds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hdds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Hdds::Name).string().not_null())
                    .col(ColumnDef::new(Hdds::CapacityGb).integer().not_null())
                    .col(ColumnDef::new(Hdds::SpindleRpm).integer().not_null())
                    .col(
                        ColumnDef::new(Hdds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hdds::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_hdds_name_capacity",
                Hdds::Table,
                &[Hdds::Name, Hdds::CapacityGb],
            ))
            .await?;

        // Coolers and compatible sockets
        manager
            .create_table(
                Table::create()
                    .table(Coolers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Coolers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Coolers::Name).string().not_null())
                    .col(ColumnDef::new(Coolers::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Coolers::MaxTdpWatts).integer().not_null())
                    .col(
                        ColumnDef::new(Coolers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Coolers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coolers_vendor")
                            .from(Coolers::Table, Coolers::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_coolers_name",
                Coolers::Table,
                &[Coolers::Name],
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CoolerSockets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoolerSockets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoolerSockets::CoolerId).uuid().not_null())
                    .col(ColumnDef::new(CoolerSockets::SocketId).uuid().not_null())
                    .col(
                        ColumnDef::new(CoolerSockets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cooler_sockets_cooler")
                            .from(CoolerSockets::Table, CoolerSockets::CoolerId)
                            .to(Coolers::Table, Coolers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cooler_sockets_socket")
                            .from(CoolerSockets::Table, CoolerSockets::SocketId)
                            .to(Sockets::Table, Sockets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_cooler_sockets_pair",
                CoolerSockets::Table,
                &[CoolerSockets::CoolerId, CoolerSockets::SocketId],
            ))
            .await?;

        // Fans
        manager
            .create_table(
                Table::create()
                    .table(Fans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fans::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fans::Name).string().not_null())
                    .col(ColumnDef::new(Fans::SizeId).uuid().not_null())
                    .col(ColumnDef::new(Fans::MaxRpm).integer().not_null())
                    .col(
                        ColumnDef::new(Fans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fans_size")
                            .from(Fans::Table, Fans::SizeId)
                            .to(FanSizes::Table, FanSizes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(unique_index(
                "ux_fans_name_size",
                Fans::Table,
                &[Fans::Name, Fans::SizeId],
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop owned join tables first, then owners, then dictionaries.
        for table in [
            TableDropStatement::new().table(CoolerSockets::Table).to_owned(),
            TableDropStatement::new().table(PsuCpuConnectors::Table).to_owned(),
            TableDropStatement::new().table(CpuRamTypes::Table).to_owned(),
            TableDropStatement::new()
                .table(CpuPowerConnectorCompat::Table)
                .to_owned(),
            TableDropStatement::new().table(Fans::Table).to_owned(),
            TableDropStatement::new().table(Coolers::Table).to_owned(),
            TableDropStatement::new().table(Hdds::Table).to_owned(),
            TableDropStatement::new().table(Ssds::Table).to_owned(),
            TableDropStatement::new().table(RamModules::Table).to_owned(),
            TableDropStatement::new().table(Psus::Table).to_owned(),
            TableDropStatement::new().table(Gpus::Table).to_owned(),
            TableDropStatement::new().table(Cpus::Table).to_owned(),
            TableDropStatement::new()
                .table(CpuPowerConnectors::Table)
                .to_owned(),
            TableDropStatement::new().table(FanSizes::Table).to_owned(),
            TableDropStatement::new().table(Chipsets::Table).to_owned(),
            TableDropStatement::new()
                .table(PsuCertificates::Table)
                .to_owned(),
            TableDropStatement::new().table(PsuFormFactors::Table).to_owned(),
            TableDropStatement::new()
                .table(MotherboardFormFactors::Table)
                .to_owned(),
            TableDropStatement::new().table(RamTypes::Table).to_owned(),
            TableDropStatement::new().table(Vendors::Table).to_owned(),
            TableDropStatement::new().table(Sockets::Table).to_owned(),
        ] {
            manager.drop_table(table).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Sockets {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Vendors {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum RamTypes {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum MotherboardFormFactors {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum PsuFormFactors {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum PsuCertificates {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Chipsets {
    Table,
    Id,
    Name,
    SocketId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum FanSizes {
    Table,
    Id,
    SizeMm,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum CpuPowerConnectors {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum CpuPowerConnectorCompat {
    Table,
    Id,
    ConnectorId,
    CompatibleId,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Cpus {
    Table,
    Id,
    Name,
    SocketId,
    Cores,
    Threads,
    TdpWatts,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum CpuRamTypes {
    Table,
    Id,
    CpuId,
    RamTypeId,
    MaxClockMhz,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Gpus {
    Table,
    Id,
    Name,
    VendorId,
    MemoryGb,
    TdpWatts,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Psus {
    Table,
    Id,
    Name,
    Wattage,
    FormFactorId,
    CertificateId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum PsuCpuConnectors {
    Table,
    Id,
    PsuId,
    ConnectorId,
    Count,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum RamModules {
    Table,
    Id,
    ClockMhz,
    CapacityGb,
    RamTypeId,
    Design,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Ssds {
    Table,
    Id,
    Name,
    CapacityGb,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Hdds {
    Table,
    Id,
    Name,
    CapacityGb,
    SpindleRpm,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Coolers {
    Table,
    Id,
    Name,
    VendorId,
    MaxTdpWatts,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum CoolerSockets {
    Table,
    Id,
    CoolerId,
    SocketId,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Fans {
    Table,
    Id,
    Name,
    SizeId,
    MaxRpm,
    CreatedAt,
    UpdatedAt,
}
