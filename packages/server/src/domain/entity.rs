//! エンティティ

use super::value_object::ConnectionId;

/// Reserved sender name for server-generated notices.
pub const ADMIN_NAME: &str = "Admin";

/// ルームに入室している接続のユーザー情報
///
/// 接続がルームに入った時点で作られ、別のルームへの入室で置き換えられ、
/// 切断で破棄される。1 つの接続につき高々 1 件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ConnectionId,
    pub name: String,
    pub room: String,
}

impl User {
    pub fn new(id: ConnectionId, name: String, room: String) -> Self {
        Self { id, name, room }
    }
}

/// チャットメッセージ（保存されず、送信時に組み立てて即座に配信される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub name: String,
    pub text: String,
    /// 送信時刻（ローカル時刻を整形済みの文字列）
    pub time: String,
}

impl ChatMessage {
    pub fn new(name: impl Into<String>, text: impl Into<String>, time: String) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            time,
        }
    }

    /// システム送信者（`ADMIN_NAME`）からのお知らせ
    pub fn from_admin(text: impl Into<String>, time: String) -> Self {
        Self::new(ADMIN_NAME, text, time)
    }
}

/// 接続先へ送られる通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// チャットメッセージ、またはシステムからのお知らせ
    Message(ChatMessage),
    /// ルームの参加者一覧
    UserList(Vec<User>),
    /// アクティブなルーム名の一覧
    RoomList(Vec<String>),
    /// 入力中の参加者名
    Activity(String),
}
