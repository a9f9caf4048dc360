#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end router tests: status codes, list shapes and error bodies.

mod common;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::send_json;

#[tokio::test]
async fn dictionary_crud_over_http() {
    let app = common::test_app().await;

    let (status, created) =
        send_json(&app, "POST", "/v1/sockets", Some(json!({"name": "AM5"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "AM5");
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, fetched) = send_json(&app, "GET", &format!("/v1/sockets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (status, patched) = send_json(
        &app,
        "PATCH",
        &format!("/v1/sockets/{id}"),
        Some(json!({"name": "AM5+"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "AM5+");

    let (status, replaced) = send_json(
        &app,
        "PUT",
        &format!("/v1/sockets/{id}"),
        Some(json!({"name": "AM6"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["name"], "AM6");

    let (status, _) = send_json(&app, "DELETE", &format!("/v1/sockets/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, "GET", &format!("/v1/sockets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Delete stays 204 after the row is gone.
    let (status, _) = send_json(&app, "DELETE", &format!("/v1/sockets/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn list_without_params_is_a_plain_array() {
    let app = common::test_app().await;
    for name in ["AM4", "AM5"] {
        send_json(&app, "POST", "/v1/sockets", Some(json!({"name": name}))).await;
    }
    let (status, body) = send_json(&app, "GET", "/v1/sockets", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("plain array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "AM4");
}

#[tokio::test]
async fn list_with_params_is_a_page_envelope() {
    let app = common::test_app().await;
    for name in ["AM4", "AM5", "LGA1700"] {
        send_json(&app, "POST", "/v1/sockets", Some(json!({"name": name}))).await;
    }
    let (status, body) = send_json(&app, "GET", "/v1/sockets?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["has_more"], true);

    let (status, body) = send_json(
        &app,
        "GET",
        "/v1/sockets?limit=2&offset=2&sort=name&dir=asc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn missing_reference_is_a_400_naming_the_field() {
    let app = common::test_app().await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/chipsets",
        Some(json!({"name": "Z790", "socket_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["param_names"], json!(["socket_id"]));
}

#[tokio::test]
async fn dangling_reference_is_a_404_for_the_referenced_kind() {
    let app = common::test_app().await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/chipsets",
        Some(json!({"name": "Z790", "socket_id": Uuid::now_v7()})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = body["violations"][0]["message"].as_str().unwrap();
    assert!(message.contains("socket"));
}

#[tokio::test]
async fn duplicate_key_is_a_400_naming_all_fields() {
    let app = common::test_app().await;
    let payload = json!({"name": "980 Pro", "capacity_gb": 1000});
    let (status, _) = send_json(&app, "POST", "/v1/ssds", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, "POST", "/v1/ssds", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["violations"][0]["param_names"],
        json!(["name", "capacity_gb"])
    );
}

#[tokio::test]
async fn empty_owned_collection_is_a_400() {
    let app = common::test_app().await;
    let (_, ff) = send_json(
        &app,
        "POST",
        "/v1/psu-form-factors",
        Some(json!({"name": "ATX"})),
    )
    .await;
    let (_, cert) = send_json(
        &app,
        "POST",
        "/v1/psu-certificates",
        Some(json!({"name": "80+ Gold"})),
    )
    .await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/psus",
        Some(json!({
            "name": "RM850x",
            "wattage": 850,
            "form_factor_id": ff["id"],
            "certificate_id": cert["id"],
            "cpu_connectors": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["param_names"], json!(["cpu_connectors"]));
}

#[tokio::test]
async fn cpu_aggregate_roundtrip_over_http() {
    let app = common::test_app().await;
    let (_, socket) = send_json(&app, "POST", "/v1/sockets", Some(json!({"name": "AM5"}))).await;
    let (_, ddr5) = send_json(&app, "POST", "/v1/ram-types", Some(json!({"name": "DDR5"}))).await;

    let (status, cpu) = send_json(
        &app,
        "POST",
        "/v1/cpus",
        Some(json!({
            "name": "Ryzen 7 7700X",
            "socket_id": socket["id"],
            "cores": 8,
            "threads": 16,
            "tdp_watts": 105,
            "supported_ram": [{"ram_type_id": ddr5["id"], "max_clock_mhz": 5200}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cpu["supported_ram"][0]["max_clock_mhz"], 5200);

    let id = cpu["id"].as_str().unwrap().to_owned();
    let (status, fetched) = send_json(&app, "GET", &format!("/v1/cpus/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["supported_ram"], cpu["supported_ram"]);

    // PATCH with a new set replaces the associations wholesale.
    let (_, ddr4) = send_json(&app, "POST", "/v1/ram-types", Some(json!({"name": "DDR4"}))).await;
    let (status, patched) = send_json(
        &app,
        "PATCH",
        &format!("/v1/cpus/{id}"),
        Some(json!({
            "supported_ram": [{"ram_type_id": ddr4["id"], "max_clock_mhz": 3200}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ram = patched["supported_ram"].as_array().unwrap();
    assert_eq!(ram.len(), 1);
    assert_eq!(ram[0]["ram_type_id"], ddr4["id"]);
}

#[tokio::test]
async fn connector_compatible_set_roundtrip_over_http() {
    let app = common::test_app().await;
    let (_, eight_pin) = send_json(
        &app,
        "POST",
        "/v1/cpu-power-connectors",
        Some(json!({"name": "8-pin EPS"})),
    )
    .await;
    let (status, four_four) = send_json(
        &app,
        "POST",
        "/v1/cpu-power-connectors",
        Some(json!({"name": "4+4 pin", "compatible": [eight_pin["id"]]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(four_four["compatible"], json!([eight_pin["id"]]));
}

#[tokio::test]
async fn deleting_a_referenced_connector_is_a_400() {
    let app = common::test_app().await;
    let (_, eight_pin) = send_json(
        &app,
        "POST",
        "/v1/cpu-power-connectors",
        Some(json!({"name": "8-pin EPS"})),
    )
    .await;
    let (_, four_four) = send_json(
        &app,
        "POST",
        "/v1/cpu-power-connectors",
        Some(json!({"name": "4+4 pin", "compatible": [eight_pin["id"]]})),
    )
    .await;

    let eight_id = eight_pin["id"].as_str().unwrap().to_owned();
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/v1/cpu-power-connectors/{eight_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["param_names"], json!(["compatible"]));

    // Removing the referencing connector unblocks the delete.
    let four_id = four_four["id"].as_str().unwrap().to_owned();
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/v1/cpu-power-connectors/{four_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/v1/cpu-power-connectors/{eight_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_id_is_a_404_with_violation_body() {
    let app = common::test_app().await;
    let missing = Uuid::now_v7();
    let (status, body) = send_json(&app, "GET", &format!("/v1/gpus/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = body["violations"][0]["message"].as_str().unwrap();
    assert!(message.contains(&missing.to_string()));
}
