//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{GetRoomUsersUseCase, GetRoomsUseCase, RoomBroadcaster};

use super::{
    handler::{get_room_users, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(room_broadcaster, get_rooms_usecase, get_room_users_usecase)
///     .with_cors(config.cors_layer());
/// server.run(&config.bind_addr()).await?;
/// ```
pub struct Server {
    /// RoomBroadcaster（ライフサイクルイベントの処理）
    room_broadcaster: Arc<RoomBroadcaster>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomUsersUseCase（ルームの参加者取得のユースケース）
    get_room_users_usecase: Arc<GetRoomUsersUseCase>,
    cors: Option<CorsLayer>,
}

impl Server {
    pub fn new(
        room_broadcaster: Arc<RoomBroadcaster>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        get_room_users_usecase: Arc<GetRoomUsersUseCase>,
    ) -> Self {
        Self {
            room_broadcaster,
            get_rooms_usecase,
            get_room_users_usecase,
            cors: None,
        }
    }

    /// Attach a CORS layer to the HTTP API (`None` keeps same-origin only)
    pub fn with_cors(mut self, cors: Option<CorsLayer>) -> Self {
        self.cors = cors;
        self
    }

    /// Build the router with all endpoints
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            room_broadcaster: self.room_broadcaster,
            get_rooms_usecase: self.get_rooms_usecase,
            get_room_users_usecase: self.get_room_users_usecase,
        });

        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room}/users", get(get_room_users))
            .with_state(app_state)
            .layer(TraceLayer::new_for_http());

        match self.cors {
            Some(cors) => app.layer(cors),
            None => app,
        }
    }

    /// Run the WebSocket chat server until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;

        tracing::info!(
            "WebSocket chat server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
