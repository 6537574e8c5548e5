//! Visit endpoints.
//!
//! - `POST /visits/` — create a visit
//! - `GET /visits/` — list every visit
//! - `GET /visits/:id` — fetch one visit
//! - `PUT /visits/` — overwrite a visit (id in the body)
//! - `DELETE /visits/:id` — delete a visit
//!
//! Extractor rejections are taken as `Result` so decode failures come back
//! as 400 with the standard error body instead of axum's plain-text defaults.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::VisitController;
use crate::models::Visit;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// `POST /visits/` — create a visit. Any `visit_id` in the body is ignored.
pub async fn create(
    State(ctl): State<VisitController>,
    body: Result<Json<Visit>, JsonRejection>,
) -> Result<(StatusCode, Json<Visit>), ApiError> {
    let Json(visit) = body?;
    let created = ctl.service.create_visit(&visit)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /visits/` — list visits.
pub async fn list(State(ctl): State<VisitController>) -> Result<Json<Vec<Visit>>, ApiError> {
    Ok(Json(ctl.service.get_all_visits()?))
}

/// `GET /visits/:id` — get one visit.
pub async fn get(
    State(ctl): State<VisitController>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Visit>, ApiError> {
    let Path(visit_id) = id?;
    Ok(Json(ctl.service.get_visit_by_id(visit_id)?))
}

/// `PUT /visits/` — full overwrite of the visit named by the body's `visit_id`.
pub async fn update(
    State(ctl): State<VisitController>,
    body: Result<Json<Visit>, JsonRejection>,
) -> Result<Json<Visit>, ApiError> {
    let Json(visit) = body?;
    if visit.visit_id == 0 {
        return Err(ApiError::BadRequest("visit_id is required".into()));
    }
    Ok(Json(ctl.service.update_visit(&visit)?))
}

/// `DELETE /visits/:id` — delete one visit.
pub async fn delete(
    State(ctl): State<VisitController>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(visit_id) = id?;
    ctl.service.delete_visit(visit_id)?;
    Ok(Json(DeleteResponse { message: "deleted" }))
}
