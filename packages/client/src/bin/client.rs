//! CLI chat client for Hiroba rooms.
//!
//! Connects to the chat server, enters the given room and sends what is typed
//! at the prompt. Automatically reconnects on disconnection (max 5 attempts
//! with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --name Alice --room lobby
//! cargo run --bin hiroba-client -- -n Bob -r kitchen
//! ```

use clap::Parser;

use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "Room-based WebSocket chat client", long_about = None)]
struct Args {
    /// Display name shown to other users
    #[arg(short = 'n', long)]
    name: String,

    /// Room to enter after connecting
    #[arg(short = 'r', long)]
    room: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3500/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = hiroba_client::run_client(args.url, args.name, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
