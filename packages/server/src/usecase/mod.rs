//! UseCase 層
//!
//! 接続のライフサイクルイベント（接続・入室・メッセージ・入力中・切断）ごとに
//! ユースケースを定義し、`RoomBroadcaster` がそれらを束ねます。
//! ルームの参加者一覧とルーム一覧は常に SessionStore から都度導出します。

mod connect_participant;
mod disconnect_participant;
mod enter_room;
mod error;
mod get_rooms;
mod notify_activity;
mod room_broadcaster;
mod send_message;

#[cfg(test)]
mod test_support;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use enter_room::EnterRoomUseCase;
pub use error::GetRoomUsersError;
pub use get_rooms::{GetRoomUsersUseCase, GetRoomsUseCase, RoomSummary};
pub use notify_activity::NotifyActivityUseCase;
pub use room_broadcaster::RoomBroadcaster;
pub use send_message::SendMessageUseCase;

use hiroba_shared::time::{Clock, format_wall_clock};

use crate::domain::ChatMessage;

pub(crate) const WELCOME_TEXT: &str = "Welcome to Chat App";

/// 現在時刻を付けたシステムからのお知らせを組み立てる
pub(crate) fn admin_message(clock: &dyn Clock, text: impl Into<String>) -> ChatMessage {
    ChatMessage::from_admin(text, format_wall_clock(&clock.now()))
}

pub(crate) fn left_text(name: &str) -> String {
    format!("{} has left the room", name)
}
