//! UseCase: 入室処理
//!
//! ## 順序の制約
//!
//! 1 イベントを 1 トランザクションとして扱う:
//! 旧状態の参照 → 退室のお知らせ → 新状態の確定 → 旧ルーム・新ルームの参加者一覧。
//! 旧ルームの参加者一覧は確定後に計算するため、移動した接続は含まれない。
//! 同じルームへの再入室も最適化せず、退室 → 入室の通知をすべて送る。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, Notification, SharedSessionStore, User};

use super::{admin_message, left_text};

/// 入室のユースケース
pub struct EnterRoomUseCase {
    sessions: SharedSessionStore,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl EnterRoomUseCase {
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

    /// 入室を実行し、登録されたユーザーを返す
    pub async fn execute(&self, id: &ConnectionId, name: String, room: String) -> User {
        let mut sessions = self.sessions.lock().await;
        let pusher = &self.message_pusher;
        let clock = self.clock.as_ref();

        let prev_room = sessions.find_user(id).map(|user| user.room);
        if let Some(prev) = &prev_room {
            pusher.leave_room(id, prev).await;
            let left = Notification::Message(admin_message(clock, left_text(&name)));
            pusher.push_to_room(prev, &left).await;
        }

        let user = sessions.upsert_user(id.clone(), name, room);

        if let Some(prev) = &prev_room {
            let roster = Notification::UserList(sessions.users_in_room(prev));
            pusher.push_to_room(prev, &roster).await;
        }

        pusher.join_room(id, &user.room).await;

        let joined_self = Notification::Message(admin_message(
            clock,
            format!("You have joined the {} chat room", user.room),
        ));
        if let Err(e) = pusher.push_to(id, &joined_self).await {
            tracing::warn!("Failed to confirm room entry to '{}': {}", id, e);
        }

        let joined_others = Notification::Message(admin_message(
            clock,
            format!("{} has joined the room", user.name),
        ));
        pusher
            .push_to_room_except(&user.room, id, &joined_others)
            .await;

        let roster = Notification::UserList(sessions.users_in_room(&user.room));
        pusher.push_to_room(&user.room, &roster).await;

        let rooms = Notification::RoomList(sessions.active_room_names());
        pusher.push_to_all(&rooms).await;

        tracing::info!(
            "'{}' ({}) entered room '{}' (previous: {:?})",
            user.name,
            id,
            user.room,
            prev_room
        );
        user
    }
}
