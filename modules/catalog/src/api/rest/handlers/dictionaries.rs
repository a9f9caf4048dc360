//! Shared handlers for the plain name dictionaries. The router binds each
//! collection to its service instance; the logic is identical across all six.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateDictionaryBody, DictionaryDto, PageDto, PageParams, PatchDictionaryBody,
};
use crate::api::rest::error::ApiError;
use crate::domain::model::DictionarySort;
use crate::domain::service::DictionaryService;

pub async fn list(
    svc: Arc<DictionaryService>,
    params: PageParams<DictionarySort>,
) -> Result<Response, ApiError> {
    if params.is_paged() {
        let page = svc.list_page(params.to_request()).await?;
        Ok(Json(PageDto::from(page.map_items(DictionaryDto::from))).into_response())
    } else {
        let items: Vec<DictionaryDto> = svc.list().await?.into_iter().map(Into::into).collect();
        Ok(Json(items).into_response())
    }
}

pub async fn get_one(svc: Arc<DictionaryService>, id: Uuid) -> Result<Json<DictionaryDto>, ApiError> {
    Ok(Json(svc.get(id).await?.into()))
}

pub async fn create(
    svc: Arc<DictionaryService>,
    body: CreateDictionaryBody,
) -> Result<(StatusCode, Json<DictionaryDto>), ApiError> {
    let created = svc.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    svc: Arc<DictionaryService>,
    id: Uuid,
    body: PatchDictionaryBody,
) -> Result<Json<DictionaryDto>, ApiError> {
    Ok(Json(svc.update(id, body.into()).await?.into()))
}

pub async fn replace(
    svc: Arc<DictionaryService>,
    id: Uuid,
    body: CreateDictionaryBody,
) -> Result<Json<DictionaryDto>, ApiError> {
    Ok(Json(svc.replace(id, body.into()).await?.into()))
}

pub async fn remove(svc: Arc<DictionaryService>, id: Uuid) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
