//! Sheet API routes
//!
//! Endpoints that turn an actor snapshot into the data a sheet renders.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{ActorSnapshotDto, SheetItemsDto};
use crate::domain::entities::Actor;
use crate::infrastructure::state::AppState;

/// Categorize an actor's items for its sheet
pub async fn sheet_context(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> Json<SheetItemsDto> {
    let actor = Actor::from(snapshot);
    Json(SheetItemsDto::from(state.sheets.sheet_data(&actor)))
}

/// List the game's attribute keys in sheet order
pub async fn list_attributes(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .sheets
            .attributes()
            .into_iter()
            .map(|a| a.key().to_string())
            .collect(),
    )
}
