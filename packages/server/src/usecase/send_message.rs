//! UseCase: メッセージ送信処理
//!
//! 送信者の現在のルームを SessionStore から解決し、送信者を含むルームの全員に配信する。
//! ルームに入っていない接続からのメッセージは何も通知せずに破棄する。

use std::sync::Arc;

use hiroba_shared::time::{Clock, format_wall_clock};

use crate::domain::{
    ChatMessage, ConnectionId, MessagePusher, Notification, SharedSessionStore,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    sessions: SharedSessionStore,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        sessions: SharedSessionStore,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// 配信したルーム名。送信者がルームに入っていなければ `None`
    pub async fn execute(&self, id: &ConnectionId, name: String, text: String) -> Option<String> {
        let sessions = self.sessions.lock().await;
        let Some(room) = sessions.find_user(id).map(|user| user.room) else {
            tracing::debug!("Dropping message from '{}': not in a room", id);
            return None;
        };

        let message = ChatMessage::new(name, text, format_wall_clock(&self.clock.now()));
        self.message_pusher
            .push_to_room(&room, &Notification::Message(message))
            .await;

        Some(room)
    }
}
