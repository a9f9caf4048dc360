#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Service-level tests for component collections: reference resolution,
//! owned collections and uniqueness keys.

mod common;

use catalog::domain::error::{DomainError, EntityKind};
use catalog::domain::model::{
    ChipsetSort, CoolerPatch, CpuPatch, CpuPowerConnectorPatch, NewChipset, NewCooler, NewCpu,
    NewCpuPowerConnector,
    NewCpuRamType, NewDictionaryEntry, NewFan, NewFanSize, NewGpu, NewHdd, NewPsu,
    NewPsuCpuConnector, NewRamModule, NewSsd, PsuPatch,
};
use catalog::domain::page::{PageRequest, SortDir};
use catalog::module::AppState;
use uuid::Uuid;

async fn dictionary_entry(
    svc: &catalog::domain::service::DictionaryService,
    name: &str,
) -> Uuid {
    svc.create(NewDictionaryEntry {
        id: None,
        name: name.to_owned(),
    })
    .await
    .unwrap()
    .id
}

fn new_cpu(name: &str, socket_id: Option<Uuid>, ram_type_id: Option<Uuid>) -> NewCpu {
    NewCpu {
        id: None,
        name: name.to_owned(),
        socket_id,
        cores: 8,
        threads: 16,
        tdp_watts: 105,
        supported_ram: vec![NewCpuRamType {
            ram_type_id,
            max_clock_mhz: 5200,
        }],
    }
}

async fn new_psu(state: &AppState, name: &str) -> NewPsu {
    let ff = dictionary_entry(&state.psu_form_factors, "ATX").await;
    let cert = dictionary_entry(&state.psu_certificates, "80+ Gold").await;
    let connector = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "8-pin EPS".to_owned(),
            compatible: vec![],
        })
        .await
        .unwrap();
    NewPsu {
        id: None,
        name: name.to_owned(),
        wattage: 850,
        form_factor_id: Some(ff),
        certificate_id: Some(cert),
        cpu_connectors: vec![NewPsuCpuConnector {
            connector_id: Some(connector.id),
            count: 2,
        }],
    }
}

// ==================== Chipsets ====================

#[tokio::test]
async fn chipset_requires_a_socket_reference() {
    let state = common::test_state().await;
    let err = state
        .chipsets
        .create(NewChipset {
            id: None,
            name: "Z790".to_owned(),
            socket_id: None,
        })
        .await
        .unwrap_err();
    match err {
        DomainError::MissingReference { field } => assert_eq!(field, "socket_id"),
        other => panic!("expected missing reference, got {other}"),
    }
}

#[tokio::test]
async fn chipset_rejects_dangling_socket() {
    let state = common::test_state().await;
    let err = state
        .chipsets
        .create(NewChipset {
            id: None,
            name: "Z790".to_owned(),
            socket_id: Some(Uuid::now_v7()),
        })
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { kind, .. } => assert_eq!(kind, EntityKind::Socket),
        other => panic!("expected not found, got {other}"),
    }
}

#[tokio::test]
async fn chipset_name_is_unique_per_socket() {
    let state = common::test_state().await;
    let lga = dictionary_entry(&state.sockets, "LGA1700").await;
    let am5 = dictionary_entry(&state.sockets, "AM5").await;

    state
        .chipsets
        .create(NewChipset {
            id: None,
            name: "X670".to_owned(),
            socket_id: Some(am5),
        })
        .await
        .unwrap();

    // Same name under a different socket is fine.
    state
        .chipsets
        .create(NewChipset {
            id: None,
            name: "X670".to_owned(),
            socket_id: Some(lga),
        })
        .await
        .unwrap();

    let err = state
        .chipsets
        .create(NewChipset {
            id: None,
            name: "X670".to_owned(),
            socket_id: Some(am5),
        })
        .await
        .unwrap_err();
    match err {
        DomainError::UniqueViolation { fields, .. } => {
            assert_eq!(fields, vec!["name", "socket_id"]);
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

#[tokio::test]
async fn chipsets_sort_by_socket_name() {
    let state = common::test_state().await;
    let am5 = dictionary_entry(&state.sockets, "AM5").await;
    let lga = dictionary_entry(&state.sockets, "LGA1700").await;

    for (name, socket) in [("Z790", lga), ("B650", am5)] {
        state
            .chipsets
            .create(NewChipset {
                id: None,
                name: name.to_owned(),
                socket_id: Some(socket),
            })
            .await
            .unwrap();
    }

    let page = state
        .chipsets
        .list_page(PageRequest {
            limit: Some(10),
            offset: 0,
            sort: ChipsetSort::SocketName,
            dir: SortDir::Desc,
        })
        .await
        .unwrap();
    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Z790", "B650"]);
}

// ==================== CPUs ====================

#[tokio::test]
async fn cpu_create_resolves_all_references() {
    let state = common::test_state().await;
    let socket = dictionary_entry(&state.sockets, "AM5").await;
    let ddr5 = dictionary_entry(&state.ram_types, "DDR5").await;

    let cpu = state
        .cpus
        .create(new_cpu("Ryzen 7 7700X", Some(socket), Some(ddr5)))
        .await
        .unwrap();
    assert_eq!(cpu.socket_id, socket);
    assert_eq!(cpu.supported_ram.len(), 1);
    assert_eq!(cpu.supported_ram[0].ram_type_id, ddr5);
    assert_eq!(cpu.supported_ram[0].max_clock_mhz, 5200);

    let fetched = state.cpus.get(cpu.id).await.unwrap();
    assert_eq!(fetched, cpu);
}

#[tokio::test]
async fn cpu_requires_supported_ram() {
    let state = common::test_state().await;
    let socket = dictionary_entry(&state.sockets, "AM5").await;
    let mut new = new_cpu("Ryzen 5 7600", Some(socket), None);
    new.supported_ram = vec![];
    let err = state.cpus.create(new).await.unwrap_err();
    match err {
        DomainError::EmptyCollection { field } => assert_eq!(field, "supported_ram"),
        other => panic!("expected empty collection, got {other}"),
    }
}

#[tokio::test]
async fn cpu_rejects_dangling_ram_type() {
    let state = common::test_state().await;
    let socket = dictionary_entry(&state.sockets, "AM5").await;
    let err = state
        .cpus
        .create(new_cpu("Ryzen 5 7600", Some(socket), Some(Uuid::now_v7())))
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { kind, .. } => assert_eq!(kind, EntityKind::RamType),
        other => panic!("expected not found, got {other}"),
    }
}

#[tokio::test]
async fn cpu_patch_replaces_the_whole_ram_set() {
    let state = common::test_state().await;
    let socket = dictionary_entry(&state.sockets, "LGA1700").await;
    let ddr4 = dictionary_entry(&state.ram_types, "DDR4").await;
    let ddr5 = dictionary_entry(&state.ram_types, "DDR5").await;

    let cpu = state
        .cpus
        .create(new_cpu("i5-13600K", Some(socket), Some(ddr4)))
        .await
        .unwrap();

    let updated = state
        .cpus
        .update(
            cpu.id,
            CpuPatch {
                supported_ram: Some(vec![NewCpuRamType {
                    ram_type_id: Some(ddr5),
                    max_clock_mhz: 5600,
                }]),
                ..CpuPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.supported_ram.len(), 1);
    assert_eq!(updated.supported_ram[0].ram_type_id, ddr5);

    // The old association is gone from storage too.
    let fetched = state.cpus.get(cpu.id).await.unwrap();
    assert_eq!(fetched.supported_ram, updated.supported_ram);
}

#[tokio::test]
async fn cpu_duplicate_ram_types_collapse_to_first() {
    let state = common::test_state().await;
    let socket = dictionary_entry(&state.sockets, "AM5").await;
    let ddr5 = dictionary_entry(&state.ram_types, "DDR5").await;

    let cpu = state
        .cpus
        .create(NewCpu {
            supported_ram: vec![
                NewCpuRamType {
                    ram_type_id: Some(ddr5),
                    max_clock_mhz: 5200,
                },
                NewCpuRamType {
                    ram_type_id: Some(ddr5),
                    max_clock_mhz: 6000,
                },
            ],
            ..new_cpu("Ryzen 9 7950X", Some(socket), Some(ddr5))
        })
        .await
        .unwrap();
    assert_eq!(cpu.supported_ram.len(), 1);
    assert_eq!(cpu.supported_ram[0].max_clock_mhz, 5200);
}

// ==================== CPU power connectors ====================

#[tokio::test]
async fn connector_compatible_set_may_be_empty() {
    let state = common::test_state().await;
    let connector = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "4-pin ATX".to_owned(),
            compatible: vec![],
        })
        .await
        .unwrap();
    assert!(connector.compatible.is_empty());
}

#[tokio::test]
async fn connector_may_list_itself_as_compatible() {
    let state = common::test_state().await;
    let id = Uuid::now_v7();
    let connector = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: Some(id),
            name: "8-pin EPS".to_owned(),
            compatible: vec![Some(id)],
        })
        .await
        .unwrap();
    assert_eq!(connector.compatible, vec![id]);
}

#[tokio::test]
async fn connector_rejects_null_compatible_element() {
    let state = common::test_state().await;
    let err = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "8-pin EPS".to_owned(),
            compatible: vec![None],
        })
        .await
        .unwrap_err();
    match err {
        DomainError::MissingReference { field } => assert_eq!(field, "compatible"),
        other => panic!("expected missing reference, got {other}"),
    }
}

#[tokio::test]
async fn connector_rejects_dangling_compatible_id() {
    let state = common::test_state().await;
    let err = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "8-pin EPS".to_owned(),
            compatible: vec![Some(Uuid::now_v7())],
        })
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { kind, .. } => assert_eq!(kind, EntityKind::CpuPowerConnector),
        other => panic!("expected not found, got {other}"),
    }
}

#[tokio::test]
async fn connector_in_another_compatible_set_cannot_be_deleted() {
    let state = common::test_state().await;
    let eps = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "8-pin EPS".to_owned(),
            compatible: vec![],
        })
        .await
        .unwrap();
    let atx4 = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "4-pin ATX".to_owned(),
            compatible: vec![Some(eps.id)],
        })
        .await
        .unwrap();

    let err = state.cpu_power_connectors.delete(eps.id).await.unwrap_err();
    match err {
        DomainError::Validation { field, .. } => assert_eq!(field, "compatible"),
        other => panic!("expected validation, got {other}"),
    }

    // Dropping the reference frees the connector for deletion.
    state
        .cpu_power_connectors
        .update(
            atx4.id,
            CpuPowerConnectorPatch {
                compatible: Some(vec![]),
                ..CpuPowerConnectorPatch::default()
            },
        )
        .await
        .unwrap();
    state.cpu_power_connectors.delete(eps.id).await.unwrap();
}

#[tokio::test]
async fn connector_used_by_a_psu_cannot_be_deleted() {
    let state = common::test_state().await;
    let new = new_psu(&state, "RM850x").await;
    let connector_id = new.cpu_connectors[0].connector_id.unwrap();
    let psu = state.psus.create(new).await.unwrap();

    let err = state
        .cpu_power_connectors
        .delete(connector_id)
        .await
        .unwrap_err();
    match err {
        DomainError::Validation { field, .. } => assert_eq!(field, "cpu_connectors"),
        other => panic!("expected validation, got {other}"),
    }

    state.psus.delete(psu.id).await.unwrap();
    state.cpu_power_connectors.delete(connector_id).await.unwrap();
}

#[tokio::test]
async fn self_compatible_connector_can_be_deleted() {
    let state = common::test_state().await;
    let id = Uuid::now_v7();
    state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: Some(id),
            name: "12VHPWR".to_owned(),
            compatible: vec![Some(id)],
        })
        .await
        .unwrap();
    state.cpu_power_connectors.delete(id).await.unwrap();
    assert!(state.cpu_power_connectors.get(id).await.is_err());
}

// ==================== GPUs ====================

#[tokio::test]
async fn gpu_is_unique_by_name_and_memory() {
    let state = common::test_state().await;
    let vendor = dictionary_entry(&state.vendors, "NVIDIA").await;
    let base = NewGpu {
        id: None,
        name: "RTX 4070".to_owned(),
        vendor_id: Some(vendor),
        memory_gb: 12,
        tdp_watts: 200,
    };

    state.gpus.create(base.clone()).await.unwrap();
    // Same name with a different memory size is a distinct card.
    state
        .gpus
        .create(NewGpu {
            memory_gb: 16,
            ..base.clone()
        })
        .await
        .unwrap();

    let err = state.gpus.create(base).await.unwrap_err();
    match err {
        DomainError::UniqueViolation { fields, .. } => {
            assert_eq!(fields, vec!["name", "memory_gb"]);
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

// ==================== PSUs ====================

#[tokio::test]
async fn psu_create_keeps_connector_counts() {
    let state = common::test_state().await;
    let new = new_psu(&state, "RM850x").await;
    let psu = state.psus.create(new).await.unwrap();
    assert_eq!(psu.cpu_connectors.len(), 1);
    assert_eq!(psu.cpu_connectors[0].count, 2);

    let fetched = state.psus.get(psu.id).await.unwrap();
    assert_eq!(fetched, psu);
}

#[tokio::test]
async fn psu_requires_cpu_connectors() {
    let state = common::test_state().await;
    let mut new = new_psu(&state, "RM750e").await;
    new.cpu_connectors = vec![];
    let err = state.psus.create(new).await.unwrap_err();
    match err {
        DomainError::EmptyCollection { field } => assert_eq!(field, "cpu_connectors"),
        other => panic!("expected empty collection, got {other}"),
    }
}

#[tokio::test]
async fn psu_rejects_dangling_connector() {
    let state = common::test_state().await;
    let mut new = new_psu(&state, "SF750").await;
    new.cpu_connectors = vec![NewPsuCpuConnector {
        connector_id: Some(Uuid::now_v7()),
        count: 1,
    }];
    let err = state.psus.create(new).await.unwrap_err();
    match err {
        DomainError::NotFound { kind, .. } => assert_eq!(kind, EntityKind::CpuPowerConnector),
        other => panic!("expected not found, got {other}"),
    }
}

#[tokio::test]
async fn psu_replace_swaps_the_connector_set() {
    let state = common::test_state().await;
    let new = new_psu(&state, "RM850x").await;
    let psu = state.psus.create(new).await.unwrap();

    let hpwr = state
        .cpu_power_connectors
        .create(NewCpuPowerConnector {
            id: None,
            name: "12VHPWR".to_owned(),
            compatible: vec![],
        })
        .await
        .unwrap();

    let replaced = state
        .psus
        .replace(
            psu.id,
            NewPsu {
                id: None,
                name: "RM850x Shift".to_owned(),
                wattage: 1000,
                form_factor_id: Some(psu.form_factor_id),
                certificate_id: Some(psu.certificate_id),
                cpu_connectors: vec![NewPsuCpuConnector {
                    connector_id: Some(hpwr.id),
                    count: 1,
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.name, "RM850x Shift");
    assert_eq!(replaced.wattage, 1000);
    assert_eq!(replaced.cpu_connectors.len(), 1);
    assert_eq!(replaced.cpu_connectors[0].connector_id, hpwr.id);
    assert_eq!(replaced.cpu_connectors[0].count, 1);
    assert_eq!(replaced.created_at, psu.created_at);

    // The old join rows are gone from storage.
    let fetched = state.psus.get(psu.id).await.unwrap();
    assert_eq!(fetched, replaced);
}

#[tokio::test]
async fn psu_patch_cannot_empty_the_connector_set() {
    let state = common::test_state().await;
    let new = new_psu(&state, "HX1000").await;
    let psu = state.psus.create(new).await.unwrap();
    let err = state
        .psus
        .update(
            psu.id,
            PsuPatch {
                cpu_connectors: Some(vec![]),
                ..PsuPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EmptyCollection { .. }));
}

// ==================== RAM modules ====================

#[tokio::test]
async fn ram_module_composite_key_is_unique() {
    let state = common::test_state().await;
    let ddr5 = dictionary_entry(&state.ram_types, "DDR5").await;
    let base = NewRamModule {
        id: None,
        clock_mhz: 6000,
        capacity_gb: 16,
        ram_type_id: Some(ddr5),
        design: "DIMM".to_owned(),
    };

    state.ram_modules.create(base.clone()).await.unwrap();
    // Differing in any key component is a distinct module.
    state
        .ram_modules
        .create(NewRamModule {
            design: "SODIMM".to_owned(),
            ..base.clone()
        })
        .await
        .unwrap();

    let err = state.ram_modules.create(base).await.unwrap_err();
    match err {
        DomainError::UniqueViolation { fields, .. } => {
            assert_eq!(
                fields,
                vec!["clock_mhz", "capacity_gb", "ram_type_id", "design"]
            );
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

// ==================== Storage devices ====================

#[tokio::test]
async fn ssd_is_unique_by_name_and_capacity() {
    let state = common::test_state().await;
    let base = NewSsd {
        id: None,
        name: "980 Pro".to_owned(),
        capacity_gb: 1000,
    };
    state.ssds.create(base.clone()).await.unwrap();
    state
        .ssds
        .create(NewSsd {
            capacity_gb: 2000,
            ..base.clone()
        })
        .await
        .unwrap();
    let err = state.ssds.create(base).await.unwrap_err();
    assert!(matches!(err, DomainError::UniqueViolation { .. }));
}

#[tokio::test]
async fn hdd_roundtrip_keeps_spindle_speed() {
    let state = common::test_state().await;
    let hdd = state
        .hdds
        .create(NewHdd {
            id: None,
            name: "IronWolf".to_owned(),
            capacity_gb: 8000,
            spindle_rpm: 7200,
        })
        .await
        .unwrap();
    let fetched = state.hdds.get(hdd.id).await.unwrap();
    assert_eq!(fetched.spindle_rpm, 7200);
}

// ==================== Cooling ====================

#[tokio::test]
async fn fan_size_must_be_positive() {
    let state = common::test_state().await;
    let err = state
        .fan_sizes
        .create(NewFanSize { id: None, size_mm: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn fan_size_value_is_unique() {
    let state = common::test_state().await;
    state
        .fan_sizes
        .create(NewFanSize {
            id: None,
            size_mm: 120,
        })
        .await
        .unwrap();
    let err = state
        .fan_sizes
        .create(NewFanSize {
            id: None,
            size_mm: 120,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UniqueViolation { .. }));
}

#[tokio::test]
async fn cooler_requires_sockets() {
    let state = common::test_state().await;
    let vendor = dictionary_entry(&state.vendors, "Noctua").await;
    let err = state
        .coolers
        .create(NewCooler {
            id: None,
            name: "NH-D15".to_owned(),
            vendor_id: Some(vendor),
            max_tdp_watts: 220,
            sockets: vec![],
        })
        .await
        .unwrap_err();
    match err {
        DomainError::EmptyCollection { field } => assert_eq!(field, "sockets"),
        other => panic!("expected empty collection, got {other}"),
    }
}

#[tokio::test]
async fn cooler_patch_replaces_the_socket_set() {
    let state = common::test_state().await;
    let vendor = dictionary_entry(&state.vendors, "Noctua").await;
    let am5 = dictionary_entry(&state.sockets, "AM5").await;
    let lga = dictionary_entry(&state.sockets, "LGA1700").await;

    let cooler = state
        .coolers
        .create(NewCooler {
            id: None,
            name: "NH-U12S".to_owned(),
            vendor_id: Some(vendor),
            max_tdp_watts: 160,
            sockets: vec![Some(am5)],
        })
        .await
        .unwrap();

    let updated = state
        .coolers
        .update(
            cooler.id,
            CoolerPatch {
                sockets: Some(vec![Some(lga)]),
                ..CoolerPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.sockets, vec![lga]);

    let fetched = state.coolers.get(cooler.id).await.unwrap();
    assert_eq!(fetched.sockets, vec![lga]);
}

#[tokio::test]
async fn fan_requires_an_existing_size() {
    let state = common::test_state().await;
    let err = state
        .fans
        .create(NewFan {
            id: None,
            name: "NF-A12x25".to_owned(),
            size_id: Some(Uuid::now_v7()),
            max_rpm: 2000,
        })
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { kind, .. } => assert_eq!(kind, EntityKind::FanSize),
        other => panic!("expected not found, got {other}"),
    }
}

#[tokio::test]
async fn fan_create_and_delete_roundtrip() {
    let state = common::test_state().await;
    let size = state
        .fan_sizes
        .create(NewFanSize {
            id: None,
            size_mm: 120,
        })
        .await
        .unwrap();
    let fan = state
        .fans
        .create(NewFan {
            id: None,
            name: "NF-A12x25".to_owned(),
            size_id: Some(size.id),
            max_rpm: 2000,
        })
        .await
        .unwrap();
    assert_eq!(fan.size_id, size.id);

    state.fans.delete(fan.id).await.unwrap();
    assert!(state.fans.get(fan.id).await.is_err());
    // Deleting again is still a success.
    state.fans.delete(fan.id).await.unwrap();
}
