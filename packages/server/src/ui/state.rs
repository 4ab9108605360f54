//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{GetRoomUsersUseCase, GetRoomsUseCase, RoomBroadcaster};

/// Shared application state
pub struct AppState {
    /// ライフサイクルイベント（接続・入室・メッセージ・入力中・切断）の処理
    pub room_broadcaster: Arc<RoomBroadcaster>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomUsersUseCase（ルームの参加者取得のユースケース）
    pub get_room_users_usecase: Arc<GetRoomUsersUseCase>,
}
