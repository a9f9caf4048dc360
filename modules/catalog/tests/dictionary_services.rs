#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Service-level tests for the plain name dictionaries.

mod common;

use catalog::domain::error::DomainError;
use catalog::domain::model::{DictionaryPatch, DictionarySort, NewDictionaryEntry};
use catalog::domain::page::{PageRequest, SortDir};
use uuid::Uuid;

fn new_entry(name: &str) -> NewDictionaryEntry {
    NewDictionaryEntry {
        id: None,
        name: name.to_owned(),
    }
}

#[tokio::test]
async fn create_and_get_roundtrip() {
    let state = common::test_state().await;
    let created = state.sockets.create(new_entry("AM5")).await.unwrap();
    let fetched = state.sockets.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "AM5");
}

#[tokio::test]
async fn create_trims_the_name() {
    let state = common::test_state().await;
    let created = state.vendors.create(new_entry("  ASUS  ")).await.unwrap();
    assert_eq!(created.name, "ASUS");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let state = common::test_state().await;
    let err = state.vendors.create(new_entry("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let state = common::test_state().await;
    state.sockets.create(new_entry("LGA1700")).await.unwrap();
    let err = state
        .sockets
        .create(new_entry("LGA1700"))
        .await
        .unwrap_err();
    match err {
        DomainError::UniqueViolation { fields, values } => {
            assert_eq!(fields, vec!["name"]);
            assert_eq!(values, vec!["LGA1700".to_owned()]);
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

#[tokio::test]
async fn update_keeps_own_name_available() {
    let state = common::test_state().await;
    let entry = state.ram_types.create(new_entry("DDR5")).await.unwrap();
    // Patching without renaming must not trip the uniqueness check on itself.
    let updated = state
        .ram_types
        .update(entry.id, DictionaryPatch { name: None })
        .await
        .unwrap();
    assert_eq!(updated.name, "DDR5");
}

#[tokio::test]
async fn rename_onto_existing_name_is_rejected() {
    let state = common::test_state().await;
    state.ram_types.create(new_entry("DDR4")).await.unwrap();
    let other = state.ram_types.create(new_entry("DDR5")).await.unwrap();
    let err = state
        .ram_types
        .update(
            other.id,
            DictionaryPatch {
                name: Some("DDR4".to_owned()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UniqueViolation { .. }));
}

#[tokio::test]
async fn replace_overwrites_the_name() {
    let state = common::test_state().await;
    let entry = state
        .psu_certificates
        .create(new_entry("80+ Gold"))
        .await
        .unwrap();
    let replaced = state
        .psu_certificates
        .replace(entry.id, new_entry("80+ Platinum"))
        .await
        .unwrap();
    assert_eq!(replaced.id, entry.id);
    assert_eq!(replaced.name, "80+ Platinum");
    assert_eq!(replaced.created_at, entry.created_at);
}

#[tokio::test]
async fn get_missing_returns_not_found() {
    let state = common::test_state().await;
    let err = state.sockets.get(Uuid::now_v7()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let state = common::test_state().await;
    let entry = state.vendors.create(new_entry("MSI")).await.unwrap();
    state.vendors.delete(entry.id).await.unwrap();
    assert!(state.vendors.get(entry.id).await.is_err());
    // Second delete of the same id still succeeds.
    state.vendors.delete(entry.id).await.unwrap();
}

#[tokio::test]
async fn client_supplied_id_is_kept() {
    let state = common::test_state().await;
    let id = Uuid::now_v7();
    let created = state
        .sockets
        .create(NewDictionaryEntry {
            id: Some(id),
            name: "sTR5".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, id);
}

#[tokio::test]
async fn list_is_sorted_by_name() {
    let state = common::test_state().await;
    for name in ["LGA1700", "AM4", "AM5"] {
        state.sockets.create(new_entry(name)).await.unwrap();
    }
    let all = state.sockets.list().await.unwrap();
    let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["AM4", "AM5", "LGA1700"]);
}

#[tokio::test]
async fn paging_reports_has_more() {
    let state = common::test_state().await;
    for name in ["AM4", "AM5", "LGA1700"] {
        state.sockets.create(new_entry(name)).await.unwrap();
    }
    let first = state
        .sockets
        .list_page(PageRequest {
            limit: Some(2),
            offset: 0,
            sort: DictionarySort::Name,
            dir: SortDir::Asc,
        })
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert!(first.has_more);

    let rest = state
        .sockets
        .list_page(PageRequest {
            limit: Some(2),
            offset: 2,
            sort: DictionarySort::Name,
            dir: SortDir::Asc,
        })
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
    assert!(!rest.has_more);
    assert_eq!(rest.items[0].name, "LGA1700");
}

#[tokio::test]
async fn paging_respects_descending_order() {
    let state = common::test_state().await;
    for name in ["AM4", "AM5", "LGA1700"] {
        state.sockets.create(new_entry(name)).await.unwrap();
    }
    let page = state
        .sockets
        .list_page(PageRequest {
            limit: Some(1),
            offset: 0,
            sort: DictionarySort::Name,
            dir: SortDir::Desc,
        })
        .await
        .unwrap();
    assert_eq!(page.items[0].name, "LGA1700");
    assert!(page.has_more);
}

#[tokio::test]
async fn dictionaries_are_isolated_from_each_other() {
    let state = common::test_state().await;
    state.sockets.create(new_entry("AM5")).await.unwrap();
    // Same name in a different dictionary is fine.
    state.vendors.create(new_entry("AM5")).await.unwrap();
    assert_eq!(state.sockets.list().await.unwrap().len(), 1);
    assert_eq!(state.vendors.list().await.unwrap().len(), 1);
}
