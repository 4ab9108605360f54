//! MessagePusher trait 定義
//!
//! 接続・ルーム単位のマルチキャストを提供するトランスポートの抽象化。
//! UseCase 層はこの trait にだけ依存し、WebSocket などの具体的な実装には依存しない。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, Notification};

/// クライアントへのメッセージ送信用チャンネル（シリアライズ済み JSON）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// ルーム単位の送信はトランスポート側のメンバーシップ（`join_room` / `leave_room`）
/// に基づく。送信先が見つからない場合や一部の送信失敗は実装側でログに残してスキップし、
/// 単一クライアントへの送信 `push_to` のみがエラーを返す。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントを登録
    async fn register_client(&self, id: ConnectionId, sender: PusherChannel);

    /// クライアントの登録を解除（所属している全ルームからも外れる）
    async fn unregister_client(&self, id: &ConnectionId);

    /// トランスポート上のルームに参加
    async fn join_room(&self, id: &ConnectionId, room: &str);

    /// トランスポート上のルームから退出
    async fn leave_room(&self, id: &ConnectionId, room: &str);

    /// 特定のクライアントに送信
    async fn push_to(
        &self,
        id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError>;

    /// ルームの全メンバーに送信
    async fn push_to_room(&self, room: &str, notification: &Notification);

    /// 送信者を除くルームのメンバーに送信
    async fn push_to_room_except(
        &self,
        room: &str,
        except: &ConnectionId,
        notification: &Notification,
    );

    /// 全クライアントに送信
    async fn push_to_all(&self, notification: &Notification);

    /// 送信者を除く全クライアントに送信
    async fn push_to_all_except(&self, except: &ConnectionId, notification: &Notification);
}
