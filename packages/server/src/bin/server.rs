//! Room-based WebSocket chat server.
//!
//! Clients enter named rooms and exchange chat messages and typing
//! notifications with the other members of their room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3500
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    config::ServerConfig,
    domain::SharedSessionStore,
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemorySessionStore},
    ui::Server,
    usecase::{GetRoomUsersUseCase, GetRoomsUseCase, RoomBroadcaster},
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::parse();

    // Initialize dependencies in order:
    // 1. SessionStore
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create SessionStore (in-memory)
    let sessions: SharedSessionStore = Arc::new(Mutex::new(InMemorySessionStore::new()));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let room_broadcaster = Arc::new(RoomBroadcaster::new(
        sessions.clone(),
        message_pusher,
        Arc::new(SystemClock),
    ));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(sessions.clone()));
    let get_room_users_usecase = Arc::new(GetRoomUsersUseCase::new(sessions));

    // 4. Create and run the server
    let server = Server::new(room_broadcaster, get_rooms_usecase, get_room_users_usecase)
        .with_cors(config.cors_layer());
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
