use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{CreatePsuBody, PageDto, PageParams, PatchPsuBody, PsuDto};
use crate::api::rest::error::ApiError;
use crate::domain::model::PsuSort;
use crate::module::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams<PsuSort>>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = state.psus.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(PsuDto::from))).into_response())
    } else {
        let items: Vec<PsuDto> = state
            .psus
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
) -> Result<Json<PsuDto>, ApiError> {
    Ok(Json(state.psus.get(id).await?.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePsuBody>,
) -> Result<(StatusCode, Json<PsuDto>), ApiError> {
    let created = state.psus.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchPsuBody>,
) -> Result<Json<PsuDto>, ApiError> {
    Ok(Json(state.psus.update(id, body.into()).await?.into()))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreatePsuBody>,
) -> Result<Json<PsuDto>, ApiError> {
    Ok(Json(state.psus.replace(id, body.into()).await?.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.psus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
