//! Route table. Every collection lives under `/v1/<collection>` with item
//! routes at `/v1/<collection>/{id}`.
//!
//! The six plain dictionaries share one set of handlers; the router binds
//! each path to its service instance through an accessor.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::api::rest::dto::{CreateDictionaryBody, PageParams, PatchDictionaryBody};
use crate::domain::model::DictionarySort;
use crate::domain::service::DictionaryService;
use crate::module::AppState;

use super::handlers::{
    chipsets, connectors, cooling, cpus, dictionaries, gpus, memory, psus, storage,
};

type DictAccessor = fn(&AppState) -> Arc<DictionaryService>;

fn dictionary_routes(
    router: Router<AppState>,
    prefix: &str,
    accessor: DictAccessor,
) -> Router<AppState> {
    let item = format!("{prefix}/{{id}}");
    router
        .route(
            prefix,
            get(
                move |State(state): State<AppState>,
                      Query(params): Query<PageParams<DictionarySort>>| async move {
                    dictionaries::list(accessor(&state), params).await
                },
            )
            .post(
                move |State(state): State<AppState>,
                      Json(body): Json<CreateDictionaryBody>| async move {
                    dictionaries::create(accessor(&state), body).await
                },
            ),
        )
        .route(
            &item,
            get(
                move |State(state): State<AppState>, Path(id): Path<Uuid>| async move {
                    dictionaries::get_one(accessor(&state), id).await
                },
            )
            .patch(
                move |State(state): State<AppState>,
                      Path(id): Path<Uuid>,
                      Json(body): Json<PatchDictionaryBody>| async move {
                    dictionaries::update(accessor(&state), id, body).await
                },
            )
            .put(
                move |State(state): State<AppState>,
                      Path(id): Path<Uuid>,
                      Json(body): Json<CreateDictionaryBody>| async move {
                    dictionaries::replace(accessor(&state), id, body).await
                },
            )
            .delete(
                move |State(state): State<AppState>, Path(id): Path<Uuid>| async move {
                    dictionaries::remove(accessor(&state), id).await
                },
            ),
        )
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new();

    router = dictionary_routes(router, "/v1/sockets", |s| s.sockets.clone());
    router = dictionary_routes(router, "/v1/vendors", |s| s.vendors.clone());
    router = dictionary_routes(router, "/v1/ram-types", |s| s.ram_types.clone());
    router = dictionary_routes(router, "/v1/motherboard-form-factors", |s| {
        s.motherboard_form_factors.clone()
    });
    router = dictionary_routes(router, "/v1/psu-form-factors", |s| s.psu_form_factors.clone());
    router = dictionary_routes(router, "/v1/psu-certificates", |s| s.psu_certificates.clone());

    router
        .route(
            "/v1/chipsets",
            get(chipsets::list).post(chipsets::create),
        )
        .route(
            "/v1/chipsets/{id}",
            get(chipsets::get_one)
                .patch(chipsets::update)
                .put(chipsets::replace)
                .delete(chipsets::remove),
        )
        .route(
            "/v1/fan-sizes",
            get(cooling::fan_size_list).post(cooling::fan_size_create),
        )
        .route(
            "/v1/fan-sizes/{id}",
            get(cooling::fan_size_get_one)
                .patch(cooling::fan_size_update)
                .put(cooling::fan_size_replace)
                .delete(cooling::fan_size_remove),
        )
        .route(
            "/v1/cpu-power-connectors",
            get(connectors::list).post(connectors::create),
        )
        .route(
            "/v1/cpu-power-connectors/{id}",
            get(connectors::get_one)
                .patch(connectors::update)
                .put(connectors::replace)
                .delete(connectors::remove),
        )
        .route("/v1/cpus", get(cpus::list).post(cpus::create))
        .route(
            "/v1/cpus/{id}",
            get(cpus::get_one)
                .patch(cpus::update)
                .put(cpus::replace)
                .delete(cpus::remove),
        )
        .route("/v1/gpus", get(gpus::list).post(gpus::create))
        .route(
            "/v1/gpus/{id}",
            get(gpus::get_one)
                .patch(gpus::update)
                .put(gpus::replace)
                .delete(gpus::remove),
        )
        .route("/v1/psus", get(psus::list).post(psus::create))
        .route(
            "/v1/psus/{id}",
            get(psus::get_one)
                .patch(psus::update)
                .put(psus::replace)
                .delete(psus::remove),
        )
        .route(
            "/v1/ram-modules",
            get(memory::list).post(memory::create),
        )
        .route(
            "/v1/ram-modules/{id}",
            get(memory::get_one)
                .patch(memory::update)
                .put(memory::replace)
                .delete(memory::remove),
        )
        .route(
            "/v1/ssds",
            get(storage::ssd_list).post(storage::ssd_create),
        )
        .route(
            "/v1/ssds/{id}",
            get(storage::ssd_get_one)
                .patch(storage::ssd_update)
                .put(storage::ssd_replace)
                .delete(storage::ssd_remove),
        )
        .route(
            "/v1/hdds",
            get(storage::hdd_list).post(storage::hdd_create),
        )
        .route(
            "/v1/hdds/{id}",
            get(storage::hdd_get_one)
                .patch(storage::hdd_update)
                .put(storage::hdd_replace)
                .delete(storage::hdd_remove),
        )
        .route(
            "/v1/coolers",
            get(cooling::cooler_list).post(cooling::cooler_create),
        )
        .route(
            "/v1/coolers/{id}",
            get(cooling::cooler_get_one)
                .patch(cooling::cooler_update)
                .put(cooling::cooler_replace)
                .delete(cooling::cooler_remove),
        )
        .route(
            "/v1/fans",
            get(cooling::fan_list).post(cooling::fan_create),
        )
        .route(
            "/v1/fans/{id}",
            get(cooling::fan_get_one)
                .patch(cooling::fan_update)
                .put(cooling::fan_replace)
                .delete(cooling::fan_remove),
        )
        .with_state(state)
}
