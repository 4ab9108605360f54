//! UseCase: 切断処理
//!
//! 接続は SessionStore とトランスポートの両方から無条件に削除する。
//! ルームに入っていた場合のみ、旧ルームへの退室のお知らせと参加者一覧、
//! 全体へのルーム一覧を送る。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, Notification, SharedSessionStore, User};

use super::{admin_message, left_text};

/// 切断のユースケース
pub struct DisconnectParticipantUseCase {
    sessions: SharedSessionStore,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl DisconnectParticipantUseCase {
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

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// 切断前に入室していたユーザー。ルームに入る前に切断した場合は `None`
    pub async fn execute(&self, id: &ConnectionId) -> Option<User> {
        let mut sessions = self.sessions.lock().await;
        let user = sessions.find_user(id);
        sessions.remove_user(id);
        self.message_pusher.unregister_client(id).await;

        let user = user?;
        let left = Notification::Message(admin_message(self.clock.as_ref(), left_text(&user.name)));
        self.message_pusher.push_to_room(&user.room, &left).await;

        let roster = Notification::UserList(sessions.users_in_room(&user.room));
        self.message_pusher.push_to_room(&user.room, &roster).await;

        let rooms = Notification::RoomList(sessions.active_room_names());
        self.message_pusher.push_to_all(&rooms).await;

        Some(user)
    }
}
