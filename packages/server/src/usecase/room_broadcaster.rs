//! RoomBroadcaster
//!
//! 接続のライフサイクルイベントを受け取り、SessionStore を更新して、
//! 各イベントが引き起こす通知を決定する。
//!
//! ```text
//! unjoined ──enter_room──▶ joined(room) ──enter_room──▶ joined(room')
//!    │                        │
//!    └──────disconnect────────┴──▶ (removed)
//! ```

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, SharedSessionStore, User};

use super::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, EnterRoomUseCase,
    NotifyActivityUseCase, SendMessageUseCase,
};

/// ライフサイクルイベントごとのユースケースを束ねたもの
pub struct RoomBroadcaster {
    connect: ConnectParticipantUseCase,
    enter_room: EnterRoomUseCase,
    send_message: SendMessageUseCase,
    notify_activity: NotifyActivityUseCase,
    disconnect: DisconnectParticipantUseCase,
}

impl RoomBroadcaster {
    /// すべてのユースケースが同じストアと MessagePusher を共有するように構築する
    pub fn new(
        sessions: SharedSessionStore,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect: ConnectParticipantUseCase::new(message_pusher.clone(), clock.clone()),
            enter_room: EnterRoomUseCase::new(
                sessions.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            send_message: SendMessageUseCase::new(
                sessions.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            notify_activity: NotifyActivityUseCase::new(sessions.clone(), message_pusher.clone()),
            disconnect: DisconnectParticipantUseCase::new(sessions, message_pusher, clock),
        }
    }

    pub async fn on_connect(&self, id: ConnectionId, sender: PusherChannel) {
        self.connect.execute(id, sender).await;
    }

    pub async fn enter_room(&self, id: &ConnectionId, name: String, room: String) -> User {
        self.enter_room.execute(id, name, room).await
    }

    pub async fn send_message(
        &self,
        id: &ConnectionId,
        name: String,
        text: String,
    ) -> Option<String> {
        self.send_message.execute(id, name, text).await
    }

    pub async fn notify_activity(&self, id: &ConnectionId, name: String) -> Option<String> {
        self.notify_activity.execute(id, name).await
    }

    pub async fn disconnect(&self, id: &ConnectionId) -> Option<User> {
        self.disconnect.execute(id).await
    }
}
