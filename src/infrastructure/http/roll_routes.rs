//! Roll API routes
//!
//! Each endpoint takes an actor snapshot and returns the defaults for the
//! roll dialog. Nothing is rolled here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ActorSnapshotDto, RollDialogDefaultsDto};
use crate::domain::entities::Actor;
use crate::domain::value_objects::{Attribute, ItemId};
use crate::infrastructure::state::AppState;

use super::sheet_error_response;

type RollResult = Result<Json<RollDialogDefaultsDto>, (StatusCode, String)>;

/// Roll a bare attribute
pub async fn roll_attribute(
    State(state): State<Arc<AppState>>,
    Path(attribute): Path<String>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> RollResult {
    let attribute: Attribute = attribute.parse().map_err(sheet_error_response)?;
    let actor = Actor::from(snapshot);
    Ok(Json(state.sheets.roll_attribute(&actor, attribute).into()))
}

/// Roll one of the actor's skills
pub async fn roll_skill(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> RollResult {
    let actor = Actor::from(snapshot);
    state
        .sheets
        .roll_skill(&actor, &ItemId::new(item_id))
        .map(|defaults| Json(defaults.into()))
        .map_err(sheet_error_response)
}

/// Roll one of the actor's weapons
pub async fn roll_weapon(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> RollResult {
    let actor = Actor::from(snapshot);
    state
        .sheets
        .roll_weapon(&actor, &ItemId::new(item_id))
        .map(|defaults| Json(defaults.into()))
        .map_err(sheet_error_response)
}

/// Roll the actor's armor rating
pub async fn roll_armor(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> Json<RollDialogDefaultsDto> {
    let actor = Actor::from(snapshot);
    Json(state.sheets.roll_armor(&actor).into())
}

/// Roll a single armor item
pub async fn roll_armor_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> RollResult {
    let actor = Actor::from(snapshot);
    state
        .sheets
        .roll_armor_item(&actor, &ItemId::new(item_id))
        .map(|defaults| Json(defaults.into()))
        .map_err(sheet_error_response)
}

/// Roll current plus permanent rot
pub async fn roll_rot(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<ActorSnapshotDto>,
) -> Json<RollDialogDefaultsDto> {
    let actor = Actor::from(snapshot);
    Json(state.sheets.roll_rot(&actor).into())
}

/// Empty dialog for a free-form roll
pub async fn roll_custom(State(state): State<Arc<AppState>>) -> Json<RollDialogDefaultsDto> {
    Json(state.sheets.roll_custom().into())
}
