//! UseCase: 接続処理
//!
//! 接続時にはルームへの所属は作られない。新しい接続にだけウェルカムメッセージを送り、
//! 既存の全接続には（ルームに関係なく）接続のお知らせを送る。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, Notification, PusherChannel};

use super::{WELCOME_TEXT, admin_message};

/// 接続のユースケース
pub struct ConnectParticipantUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            message_pusher,
            clock,
        }
    }

    /// 接続を実行
    ///
    /// # Arguments
    ///
    /// * `id` - トランスポートが払い出した接続 ID
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    pub async fn execute(&self, id: ConnectionId, sender: PusherChannel) {
        self.message_pusher.register_client(id.clone(), sender).await;

        let welcome = Notification::Message(admin_message(self.clock.as_ref(), WELCOME_TEXT));
        if let Err(e) = self.message_pusher.push_to(&id, &welcome).await {
            tracing::warn!("Failed to send welcome to '{}': {}", id, e);
        }

        let connected = Notification::Message(admin_message(
            self.clock.as_ref(),
            format!("User {} connected", id.short()),
        ));
        self.message_pusher.push_to_all_except(&id, &connected).await;

        tracing::info!("Connection '{}' registered", id);
    }
}
