//! Conversion logic between domain entities and DTOs.

use crate::domain::{ChatMessage, Notification, User};
use crate::infrastructure::dto::websocket as dto;

impl From<User> for dto::UserDto {
    fn from(model: User) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            room: model.room,
        }
    }
}

impl From<ChatMessage> for dto::ChatMessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            name: model.name,
            text: model.text,
            time: model.time,
        }
    }
}

impl From<Notification> for dto::ServerEvent {
    fn from(model: Notification) -> Self {
        match model {
            Notification::Message(message) => Self::Message(message.into()),
            Notification::UserList(users) => Self::UserList(dto::UserListDto {
                users: users.into_iter().map(Into::into).collect(),
            }),
            Notification::RoomList(rooms) => Self::RoomList(dto::RoomListDto { rooms }),
            Notification::Activity(name) => Self::Activity(name),
        }
    }
}

impl From<&Notification> for dto::ServerEvent {
    fn from(model: &Notification) -> Self {
        model.clone().into()
    }
}
