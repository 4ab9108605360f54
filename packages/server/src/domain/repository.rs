//! SessionStore trait 定義
//!
//! 接続 ID → {表示名, ルーム} の対応を保持するストアのインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 排他制御
//!
//! ストア自体はロックを持たない純粋な状態です。UseCase 層は
//! `SharedSessionStore` のロックを 1 イベントにつき 1 回だけ取得し、
//! 参照 → 更新 → 参加者一覧の再計算までを同じクリティカルセクションで行います。

use std::sync::Arc;

use tokio::sync::Mutex;

use super::{ConnectionId, User};

/// UseCase 間で共有されるストア
pub type SharedSessionStore = Arc<Mutex<dyn SessionStore>>;

/// Session Store trait
///
/// 返り値はすべてコピーであり、内部のコレクションへの可変参照は外に出さない。
pub trait SessionStore: Send {
    /// ユーザーを登録する。同じ接続 ID の既存レコードは置き換える
    fn upsert_user(&mut self, id: ConnectionId, name: String, room: String) -> User;

    /// ユーザーを削除する（存在しなければ何もしない）
    fn remove_user(&mut self, id: &ConnectionId);

    /// 接続 ID でユーザーを検索
    fn find_user(&self, id: &ConnectionId) -> Option<User>;

    /// 指定ルームにいるユーザー（登録順）
    fn users_in_room(&self, room: &str) -> Vec<User>;

    /// アクティブなルーム名（重複なし、最初に現れた順）
    fn active_room_names(&self) -> Vec<String>;

    /// 全ユーザー（登録順）
    fn users(&self) -> Vec<User>;
}
