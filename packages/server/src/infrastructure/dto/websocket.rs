//! WebSocket event DTOs.
//!
//! Every frame is a JSON text frame of the form `{"event": <name>, "data": <payload>}`.

use serde::{Deserialize, Serialize};

/// Events sent from a client to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Enter (or switch to) a room under a display name
    EnterRoom(EnterRoomPayload),
    /// Chat message to the current room
    Message(MessagePayload),
    /// Typing activity, carrying the sender's display name
    Activity(String),
}

/// Payload of `enterRoom`.
///
/// Missing fields degrade to empty strings instead of rejecting the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterRoomPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room: String,
}

/// Payload of an inbound `message`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Events sent from the server to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Message(ChatMessageDto),
    UserList(UserListDto),
    RoomList(RoomListDto),
    Activity(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub name: String,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListDto {
    pub rooms: Vec<String>,
}
