use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{CpuDto, CreateCpuBody, PageDto, PageParams, PatchCpuBody};
use crate::api::rest::error::ApiError;
use crate::domain::model::CpuSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<CpuSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.cpus.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(CpuDto::from))).into_response())
    } else {
        let items: Vec<CpuDto> = state
            .cpus
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
) -> Result<Json<CpuDto>, ApiError> {
    Ok(Json(state.cpus.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCpuBody>,
) -> Result<(StatusCode, Json<CpuDto>), ApiError> {
    let created = state.cpus.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchCpuBody>,
) -> Result<Json<CpuDto>, ApiError> {
    Ok(Json(state.cpus.update(id, body.into()).await?.into()))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateCpuBody>,
) -> Result<Json<CpuDto>, ApiError> {
    Ok(Json(state.cpus.replace(id, body.into()).await?.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.cpus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
