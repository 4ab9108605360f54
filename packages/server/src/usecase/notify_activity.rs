//! UseCase: 入力中通知
//!
//! 送信者を除くルームのメンバーに、送信者の表示名を通知する。
//! 状態は保持せず、タイムアウトもない（入力終了の扱いはクライアントの責務）。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Notification, SharedSessionStore};

/// 入力中通知のユースケース
pub struct NotifyActivityUseCase {
    sessions: SharedSessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl NotifyActivityUseCase {
    pub fn new(sessions: SharedSessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            sessions,
            message_pusher,
        }
    }

    /// 入力中通知を実行。送信者がルームに入っていなければ何もしない
    pub async fn execute(&self, id: &ConnectionId, name: String) -> Option<String> {
        let sessions = self.sessions.lock().await;
        let room = sessions.find_user(id)?.room;

        self.message_pusher
            .push_to_room_except(&room, id, &Notification::Activity(name))
            .await;

        Some(room)
    }
}
