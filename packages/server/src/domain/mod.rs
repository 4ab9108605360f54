//! ドメイン層
//!
//! 接続・ユーザー・ルームのモデルと、UseCase 層が依存するインターフェース
//! （`SessionStore`, `MessagePusher`）を定義します。
//! ルームは独立したエンティティとしては保持せず、ユーザー集合から導出します。

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{ADMIN_NAME, ChatMessage, Notification, User};
pub use error::{MessagePushError, ValueObjectError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{SessionStore, SharedSessionStore};
pub use value_object::ConnectionId;

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
