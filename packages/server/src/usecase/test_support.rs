//! UseCase テスト用のフェイク

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{FixedOffset, TimeZone};
use hiroba_shared::time::{Clock, FixedClock};
use tokio::sync::Mutex;

use crate::{
    domain::{
        ConnectionId, MessagePushError, MessagePusher, Notification, PusherChannel,
        SharedSessionStore,
    },
    infrastructure::repository::InMemorySessionStore,
};

/// RecordingPusher に記録される操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pushed {
    Register(ConnectionId),
    Unregister(ConnectionId),
    Join(ConnectionId, String),
    Leave(ConnectionId, String),
    To(ConnectionId, Notification),
    Room(String, Notification),
    RoomExcept(String, ConnectionId, Notification),
    All(Notification),
    AllExcept(ConnectionId, Notification),
}

/// 呼び出しを順番どおりに記録する MessagePusher
#[derive(Default)]
pub struct RecordingPusher {
    log: Mutex<Vec<Pushed>>,
}

impl RecordingPusher {
    /// 記録を取り出してクリアする
    pub async fn take(&self) -> Vec<Pushed> {
        std::mem::take(&mut *self.log.lock().await)
    }

    async fn record(&self, entry: Pushed) {
        self.log.lock().await.push(entry);
    }
}

#[async_trait]
impl MessagePusher for RecordingPusher {
    async fn register_client(&self, id: ConnectionId, _sender: PusherChannel) {
        self.record(Pushed::Register(id)).await;
    }

    async fn unregister_client(&self, id: &ConnectionId) {
        self.record(Pushed::Unregister(id.clone())).await;
    }

    async fn join_room(&self, id: &ConnectionId, room: &str) {
        self.record(Pushed::Join(id.clone(), room.to_string())).await;
    }

    async fn leave_room(&self, id: &ConnectionId, room: &str) {
        self.record(Pushed::Leave(id.clone(), room.to_string())).await;
    }

    async fn push_to(
        &self,
        id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        self.record(Pushed::To(id.clone(), notification.clone())).await;
        Ok(())
    }

    async fn push_to_room(&self, room: &str, notification: &Notification) {
        self.record(Pushed::Room(room.to_string(), notification.clone()))
            .await;
    }

    async fn push_to_room_except(
        &self,
        room: &str,
        except: &ConnectionId,
        notification: &Notification,
    ) {
        self.record(Pushed::RoomExcept(
            room.to_string(),
            except.clone(),
            notification.clone(),
        ))
        .await;
    }

    async fn push_to_all(&self, notification: &Notification) {
        self.record(Pushed::All(notification.clone())).await;
    }

    async fn push_to_all_except(&self, except: &ConnectionId, notification: &Notification) {
        self.record(Pushed::AllExcept(except.clone(), notification.clone()))
            .await;
    }
}

pub fn conn(value: &str) -> ConnectionId {
    ConnectionId::new(value.to_string()).unwrap()
}

pub fn shared_store() -> SharedSessionStore {
    Arc::new(Mutex::new(InMemorySessionStore::new()))
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    let time = FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 1, 1, 15, 4, 5)
        .unwrap();
    Arc::new(FixedClock::new(time))
}
