use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{ChipsetDto, CreateChipsetBody, PageDto, PageParams, PatchChipsetBody};
use crate::api::rest::error::ApiError;
use crate::domain::model::ChipsetSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<ChipsetSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.chipsets.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(ChipsetDto::from))).into_response())
    } else {
        let items: Vec<ChipsetDto> = state
            .chipsets
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
) -> Result<Json<ChipsetDto>, ApiError> {
    Ok(Json(state.chipsets.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateChipsetBody>,
) -> Result<(StatusCode, Json<ChipsetDto>), ApiError> {
    let created = state.chipsets.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchChipsetBody>,
) -> Result<Json<ChipsetDto>, ApiError> {
    Ok(Json(state.chipsets.update(id, body.into()).await?.into()))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateChipsetBody>,
) -> Result<Json<ChipsetDto>, ApiError> {
    Ok(Json(state.chipsets.replace(id, body.into()).await?.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.chipsets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
