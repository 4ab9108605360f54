//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{RoomSummaryDto, RoomUsersDto},
    ui::state::AppState,
    usecase::GetRoomUsersError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of active rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let summaries = rooms
        .into_iter()
        .map(|room| RoomSummaryDto {
            name: room.name,
            users: room.user_count,
        })
        .collect();

    Json(summaries)
}

/// Get the members of a room
pub async fn get_room_users(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomUsersDto>, StatusCode> {
    match state.get_room_users_usecase.execute(&room).await {
        Ok(users) => Ok(Json(RoomUsersDto {
            room,
            users: users.into_iter().map(Into::into).collect(),
        })),
        Err(GetRoomUsersError::RoomNotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}
