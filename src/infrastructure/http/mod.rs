//! HTTP REST API routes

mod roll_routes;
mod sheet_routes;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::domain::error::SheetError;
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Sheet routes
        .route("/api/sheets/context", post(sheet_routes::sheet_context))
        .route("/api/context/attributes", get(sheet_routes::list_attributes))
        // Roll routes
        .route(
            "/api/rolls/attribute/{attribute}",
            post(roll_routes::roll_attribute),
        )
        .route("/api/rolls/skill/{item_id}", post(roll_routes::roll_skill))
        .route("/api/rolls/weapon/{item_id}", post(roll_routes::roll_weapon))
        .route("/api/rolls/armor", post(roll_routes::roll_armor))
        .route(
            "/api/rolls/armor/{item_id}",
            post(roll_routes::roll_armor_item),
        )
        .route("/api/rolls/rot", post(roll_routes::roll_rot))
        .route("/api/rolls/custom", post(roll_routes::roll_custom))
}

pub(crate) fn sheet_error_response(error: SheetError) -> (StatusCode, String) {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, error.to_string())
}
