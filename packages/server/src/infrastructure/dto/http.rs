//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::UserDto;

/// Summary of an active room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    /// Number of members currently in the room
    pub users: usize,
}

/// Members of a single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomUsersDto {
    pub room: String,
    pub users: Vec<UserDto>,
}
