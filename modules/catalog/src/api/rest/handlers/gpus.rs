use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{CreateGpuBody, GpuDto, PageDto, PageParams, PatchGpuBody};
use crate::api::rest::error::ApiError;
use crate::domain::model::GpuSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<GpuSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.gpus.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(GpuDto::from))).into_response())
    } else {
        let items: Vec<GpuDto> = state
            .gpus
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
) -> Result<Json<GpuDto>, ApiError> {
    Ok(Json(state.gpus.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateGpuBody>,
) -> Result<(StatusCode, Json<GpuDto>), ApiError> {
    let created = state.gpus.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchGpuBody>,
) -> Result<Json<GpuDto>, ApiError> {
    Ok(Json(state.gpus.update(id, body.into()).await?.into()))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateGpuBody>,
) -> Result<Json<GpuDto>, ApiError> {
    Ok(Json(state.gpus.replace(id, body.into()).await?.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.gpus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
