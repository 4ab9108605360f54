//! UseCase: ルーム一覧・ルームの参加者取得（HTTP API 用の読み取り専用ビュー）

use crate::domain::{SharedSessionStore, User};

use super::error::GetRoomUsersError;

/// アクティブなルームの概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub name: String,
    pub user_count: usize,
}

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    sessions: SharedSessionStore,
}

impl GetRoomsUseCase {
    pub fn new(sessions: SharedSessionStore) -> Self {
        Self { sessions }
    }

    /// ユーザーのスナップショット 1 回分から集計する（ルームは最初に現れた順）
    pub async fn execute(&self) -> Vec<RoomSummary> {
        let users = self.sessions.lock().await.users();

        let mut summaries: Vec<RoomSummary> = Vec::new();
        for user in users {
            match summaries.iter_mut().find(|s| s.name == user.room) {
                Some(summary) => summary.user_count += 1,
                None => summaries.push(RoomSummary {
                    name: user.room,
                    user_count: 1,
                }),
            }
        }
        summaries
    }
}

/// ルームの参加者取得のユースケース
pub struct GetRoomUsersUseCase {
    sessions: SharedSessionStore,
}

impl GetRoomUsersUseCase {
    pub fn new(sessions: SharedSessionStore) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, room: &str) -> Result<Vec<User>, GetRoomUsersError> {
        let users = self.sessions.lock().await.users_in_room(room);
        if users.is_empty() {
            return Err(GetRoomUsersError::RoomNotFound(room.to_string()));
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{conn, shared_store};

    #[tokio::test]
    async fn test_get_rooms_counts_members() {
        // テスト項目: ルーム一覧がメンバー数付きで返される
        // given (前提条件):
        let sessions = shared_store();
        {
            let mut store = sessions.lock().await;
            store.upsert_user(conn("c1"), "Alice".to_string(), "lobby".to_string());
            store.upsert_user(conn("c2"), "Bob".to_string(), "general".to_string());
            store.upsert_user(conn("c3"), "Carol".to_string(), "lobby".to_string());
        }
        let usecase = GetRoomsUseCase::new(sessions);

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            result,
            vec![
                RoomSummary {
                    name: "lobby".to_string(),
                    user_count: 2
                },
                RoomSummary {
                    name: "general".to_string(),
                    user_count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_get_rooms_follows_room_switches() {
        // テスト項目: ルームを移動したユーザーは移動先のルームで数えられ、空になったルームは消える
        // given (前提条件):
        let sessions = shared_store();
        {
            let mut store = sessions.lock().await;
            store.upsert_user(conn("c1"), "Alice".to_string(), "lobby".to_string());
            store.upsert_user(conn("c2"), "Bob".to_string(), "general".to_string());
            store.upsert_user(conn("c1"), "Alice".to_string(), "general".to_string());
        }
        let usecase = GetRoomsUseCase::new(sessions.clone());

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果): 一覧は SessionStore のルーム名の導出と一致する
        assert_eq!(
            result,
            vec![RoomSummary {
                name: "general".to_string(),
                user_count: 2
            }]
        );
        let names: Vec<String> = result.into_iter().map(|s| s.name).collect();
        assert_eq!(names, sessions.lock().await.active_room_names());
    }

    #[tokio::test]
    async fn test_get_room_users_for_empty_room_is_not_found() {
        // テスト項目: メンバーのいないルームは存在しないものとして扱われる
        // given (前提条件):
        let usecase = GetRoomUsersUseCase::new(shared_store());

        // when (操作):
        let result = usecase.execute("lobby").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetRoomUsersError::RoomNotFound("lobby".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_room_users_returns_roster() {
        // テスト項目: ルームの参加者一覧が返される
        // given (前提条件):
        let sessions = shared_store();
        sessions
            .lock()
            .await
            .upsert_user(conn("c1"), "Alice".to_string(), "lobby".to_string());
        let usecase = GetRoomUsersUseCase::new(sessions);

        // when (操作):
        let result = usecase.execute("lobby").await.unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alice");
    }
}
