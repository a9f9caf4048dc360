//! Handlers for the cooling collections (fan sizes, coolers, fans).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{
    CoolerDto, CreateCoolerBody, CreateFanBody, CreateFanSizeBody, FanDto, FanSizeDto, PageDto,
    PageParams, PatchCoolerBody, PatchFanBody, PatchFanSizeBody,
};
use crate::api::rest::error::ApiError;
use crate::domain::model::{CoolerSort, FanSizeSort, FanSort};
use crate::module::AppState;

pub async fn fan_size_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<FanSizeSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.fan_sizes.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(FanSizeDto::from))).into_response())
    } else {
        let items: Vec<FanSizeDto> = state
            .fan_sizes
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn fan_size_get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FanSizeDto>, ApiError> {
    Ok(Json(state.fan_sizes.get(id).await?.into()))
}

pub async fn fan_size_create(
    State(state): State<AppState>,
    Json(body): Json<CreateFanSizeBody>,
) -> Result<(StatusCode, Json<FanSizeDto>), ApiError> {
    let created = state.fan_sizes.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn fan_size_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchFanSizeBody>,
) -> Result<Json<FanSizeDto>, ApiError> {
    Ok(Json(state.fan_sizes.update(id, body.into()).await?.into()))
}

pub async fn fan_size_replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateFanSizeBody>,
) -> Result<Json<FanSizeDto>, ApiError> {
    Ok(Json(state.fan_sizes.replace(id, body.into()).await?.into()))
}

pub async fn fan_size_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.fan_sizes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn cooler_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<CoolerSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.coolers.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(CoolerDto::from))).into_response())
    } else {
        let items: Vec<CoolerDto> = state
            .coolers
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn cooler_get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoolerDto>, ApiError> {
    Ok(Json(state.coolers.get(id).await?.into()))
}

pub async fn cooler_create(
    State(state): State<AppState>,
    Json(body): Json<CreateCoolerBody>,
) -> Result<(StatusCode, Json<CoolerDto>), ApiError> {
    let created = state.coolers.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn cooler_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchCoolerBody>,
) -> Result<Json<CoolerDto>, ApiError> {
    Ok(Json(state.coolers.update(id, body.into()).await?.into()))
}

pub async fn cooler_replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateCoolerBody>,
) -> Result<Json<CoolerDto>, ApiError> {
    Ok(Json(state.coolers.replace(id, body.into()).await?.into()))
}

pub async fn cooler_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.coolers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn fan_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<FanSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.fans.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(FanDto::from))).into_response())
    } else {
        let items: Vec<FanDto> = state
            .fans
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Json(items).into_response())
    }
}

pub async fn fan_get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FanDto>, ApiError> {
    Ok(Json(state.fans.get(id).await?.into()))
}

pub async fn fan_create(
    State(state): State<AppState>,
    Json(body): Json<CreateFanBody>,
) -> Result<(StatusCode, Json<FanDto>), ApiError> {
    let created = state.fans.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn fan_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchFanBody>,
) -> Result<Json<FanDto>, ApiError> {
    Ok(Json(state.fans.update(id, body.into()).await?.into()))
}

pub async fn fan_replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateFanBody>,
) -> Result<Json<FanDto>, ApiError> {
    Ok(Json(state.fans.replace(id, body.into()).await?.into()))
}

pub async fn fan_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.fans.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
