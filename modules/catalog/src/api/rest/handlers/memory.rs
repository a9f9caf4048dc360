use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateRamModuleBody, PageDto, PageParams, PatchRamModuleBody, RamModuleDto,
};
use crate::api::rest::error::ApiError;
use crate::domain::model::RamModuleSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<RamModuleSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.ram_modules.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(RamModuleDto::from))).into_response())
    } else {
        let items: Vec<RamModuleDto> = state
            .ram_modules
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
) -> Result<Json<RamModuleDto>, ApiError> {
    Ok(Json(state.ram_modules.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRamModuleBody>,
) -> Result<(StatusCode, Json<RamModuleDto>), ApiError> {
    let created = state.ram_modules.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchRamModuleBody>,
) -> Result<Json<RamModuleDto>, ApiError> {
    Ok(Json(state.ram_modules.update(id, body.into()).await?.into()))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateRamModuleBody>,
) -> Result<Json<RamModuleDto>, ApiError> {
    Ok(Json(state.ram_modules.replace(id, body.into()).await?.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.ram_modules.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
