use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{
    CpuPowerConnectorDto, CreateCpuPowerConnectorBody, PageDto, PageParams,
    PatchCpuPowerConnectorBody,
};
use crate::api::rest::error::ApiError;
use crate::domain::model::CpuPowerConnectorSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<CpuPowerConnectorSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state
            .cpu_power_connectors
            .list_page(params.to_request())
            .await?;
        Ok(Json(PageDto::from(page.map_items(CpuPowerConnectorDto::from))).into_response())
    } else {
        let items: Vec<CpuPowerConnectorDto> = state
            .cpu_power_connectors
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CpuPowerConnectorDto>, ApiError> {
    Ok(Json(state.cpu_power_connectors.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCpuPowerConnectorBody>,
) -> Result<(StatusCode, Json<CpuPowerConnectorDto>), ApiError> {
    let created = state.cpu_power_connectors.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchCpuPowerConnectorBody>,
) -> Result<Json<CpuPowerConnectorDto>, ApiError> {
    Ok(Json(
        state.cpu_power_connectors.update(id, body.into()).await?.into(),
    ))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateCpuPowerConnectorBody>,
) -> Result<Json<CpuPowerConnectorDto>, ApiError> {
    Ok(Json(
        state
            .cpu_power_connectors
            .replace(id, body.into())
            .await?
            .into(),
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.cpu_power_connectors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
