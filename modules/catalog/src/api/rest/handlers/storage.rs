//! Handlers for the storage device collections (SSDs and HDDs).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateHddBody, CreateSsdBody, HddDto, PageDto, PageParams, PatchHddBody, PatchSsdBody, SsdDto,
};
use crate::api::rest::error::ApiError;
use crate::domain::model::{HddSort, SsdSort};
use crate::module::AppState;

pub async fn ssd_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<SsdSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.ssds.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(SsdDto::from))).into_response())
    } else {
        let items: Vec<SsdDto> = state
            .ssds
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn ssd_get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SsdDto>, ApiError> {
    Ok(Json(state.ssds.get(id).await?.into()))
}

pub async fn ssd_create(
    State(state): State<AppState>,
    Json(body): Json<CreateSsdBody>,
) -> Result<(StatusCode, Json<SsdDto>), ApiError> {
    let created = state.ssds.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn ssd_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchSsdBody>,
) -> Result<Json<SsdDto>, ApiError> {
    Ok(Json(state.ssds.update(id, body.into()).await?.into()))
}

pub async fn ssd_replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateSsdBody>,
) -> Result<Json<SsdDto>, ApiError> {
    Ok(Json(state.ssds.replace(id, body.into()).await?.into()))
}

pub async fn ssd_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.ssds.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn hdd_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<HddSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.hdds.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(HddDto::from))).into_response())
    } else {
        let items: Vec<HddDto> = state
            .hdds
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn hdd_get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HddDto>, ApiError> {
    Ok(Json(state.hdds.get(id).await?.into()))
}

pub async fn hdd_create(
    State(state): State<AppState>,
    Json(body): Json<CreateHddBody>,
) -> Result<(StatusCode, Json<HddDto>), ApiError> {
    let created = state.hdds.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn hdd_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchHddBody>,
) -> Result<Json<HddDto>, ApiError> {
    Ok(Json(state.hdds.update(id, body.into()).await?.into()))
}

pub async fn hdd_replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateHddBody>,
) -> Result<Json<HddDto>, ApiError> {
    Ok(Json(state.hdds.replace(id, body.into()).await?.into()))
}

pub async fn hdd_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.hdds.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
