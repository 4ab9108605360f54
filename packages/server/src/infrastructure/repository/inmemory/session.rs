//! InMemory SessionStore 実装
//!
//! ドメイン層が定義する SessionStore trait の具体的な実装。
//! 登録順を保つため `Vec<User>` をインメモリ DB として使用します。
//! ルームはこのコレクションから毎回導出し、別途保持しません。

use crate::domain::{ConnectionId, SessionStore, User};

/// インメモリ SessionStore 実装
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    users: Vec<User>,
}

impl InMemorySessionStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn upsert_user(&mut self, id: ConnectionId, name: String, room: String) -> User {
        let user = User::new(id, name, room);
        self.users.retain(|u| u.id != user.id);
        self.users.push(user.clone());
        user
    }

    fn remove_user(&mut self, id: &ConnectionId) {
        self.users.retain(|u| &u.id != id);
    }

    fn find_user(&self, id: &ConnectionId) -> Option<User> {
        self.users.iter().find(|u| &u.id == id).cloned()
    }

    fn users_in_room(&self, room: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.room == room)
            .cloned()
            .collect()
    }

    fn active_room_names(&self) -> Vec<String> {
        let mut rooms: Vec<String> = Vec::new();
        for user in &self.users {
            if !rooms.contains(&user.room) {
                rooms.push(user.room.clone());
            }
        }
        rooms
    }

    fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}
