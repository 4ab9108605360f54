//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` の管理
//! - トランスポート上のルームメンバーシップ（join / leave）の管理
//! - 通知の JSON シリアライズと送信（push_to, ルーム宛て, 全体宛て）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui::handler::websocket`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! ルームメンバーシップはユーザー情報（SessionStore）とは独立しており、
//! UseCase 層が `join_room` / `leave_room` で明示的に更新します。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, Notification, PusherChannel},
    infrastructure::dto::websocket::ServerEvent,
};

#[derive(Default)]
struct Registry {
    /// 接続中のクライアントの WebSocket sender
    clients: HashMap<ConnectionId, PusherChannel>,
    /// ルーム名 → メンバーの接続 ID
    rooms: HashMap<String, HashSet<ConnectionId>>,
}

impl Registry {
    fn send(&self, id: &ConnectionId, content: &str) -> Result<(), MessagePushError> {
        let sender = self
            .clients
            .get(id)
            .ok_or_else(|| MessagePushError::ClientNotFound(id.to_string()))?;
        sender
            .send(content.to_string())
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))
    }

    /// ブロードキャストでは一部の送信失敗を許容
    fn send_many<'a>(&self, targets: impl Iterator<Item = &'a ConnectionId>, content: &str) {
        for target in targets {
            match self.send(target, content) {
                Ok(()) => tracing::debug!("Pushed message to client '{}'", target),
                Err(e) => tracing::warn!("Skipping client '{}' during broadcast: {}", target, e),
            }
        }
    }

    fn room_members(&self, room: &str) -> impl Iterator<Item = &ConnectionId> {
        self.rooms.get(room).into_iter().flatten()
    }
}

fn encode(notification: &Notification) -> Result<String, MessagePushError> {
    serde_json::to_string(&ServerEvent::from(notification))
        .map_err(|e| MessagePushError::Serialization(e.to_string()))
}

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_client(id.clone(), tx).await;
/// pusher.join_room(&id, "lobby").await;
/// pusher.push_to_room("lobby", &notification).await;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    registry: Mutex<Registry>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 接続中のクライアント数
    #[cfg(test)]
    pub(crate) async fn client_count(&self) -> usize {
        self.registry.lock().await.clients.len()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, id: ConnectionId, sender: PusherChannel) {
        let mut registry = self.registry.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", id);
        registry.clients.insert(id, sender);
    }

    async fn unregister_client(&self, id: &ConnectionId) {
        let mut registry = self.registry.lock().await;
        registry.clients.remove(id);
        registry.rooms.retain(|_, members| {
            members.remove(id);
            !members.is_empty()
        });
        tracing::debug!("Client '{}' unregistered from MessagePusher", id);
    }

    async fn join_room(&self, id: &ConnectionId, room: &str) {
        let mut registry = self.registry.lock().await;
        registry
            .rooms
            .entry(room.to_string())
            .or_default()
            .insert(id.clone());
    }

    async fn leave_room(&self, id: &ConnectionId, room: &str) {
        let mut registry = self.registry.lock().await;
        if let Some(members) = registry.rooms.get_mut(room) {
            members.remove(id);
            if members.is_empty() {
                registry.rooms.remove(room);
            }
        }
    }

    async fn push_to(
        &self,
        id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        let content = encode(notification)?;
        let registry = self.registry.lock().await;
        registry.send(id, &content)?;
        tracing::debug!("Pushed message to client '{}'", id);
        Ok(())
    }

    async fn push_to_room(&self, room: &str, notification: &Notification) {
        let content = match encode(notification) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("{}", e);
                return;
            }
        };
        let registry = self.registry.lock().await;
        registry.send_many(registry.room_members(room), &content);
    }

    async fn push_to_room_except(
        &self,
        room: &str,
        except: &ConnectionId,
        notification: &Notification,
    ) {
        let content = match encode(notification) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("{}", e);
                return;
            }
        };
        let registry = self.registry.lock().await;
        registry.send_many(registry.room_members(room).filter(|id| *id != except), &content);
    }

    async fn push_to_all(&self, notification: &Notification) {
        let content = match encode(notification) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("{}", e);
                return;
            }
        };
        let registry = self.registry.lock().await;
        registry.send_many(registry.clients.keys(), &content);
    }

    async fn push_to_all_except(&self, except: &ConnectionId, notification: &Notification) {
        let content = match encode(notification) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("{}", e);
                return;
            }
        };
        let registry = self.registry.lock().await;
        registry.send_many(registry.clients.keys().filter(|id| *id != except), &content);
    }
}
