//! UseCase 層のエラー型

use thiserror::Error;

/// ルームの参加者取得時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomUsersError {
    /// メンバーのいないルームは存在しない
    #[error("Room '{0}' not found")]
    RoomNotFound(String),
}
