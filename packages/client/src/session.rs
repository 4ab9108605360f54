//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use hiroba_server::infrastructure::dto::websocket::{
    ClientEvent, EnterRoomPayload, MessagePayload, ServerEvent,
};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::{
    command::UserInput,
    error::ClientError,
    formatter::MessageFormatter,
    ui::{prompt, redisplay_prompt},
};

fn encode(event: &ClientEvent) -> Result<Message, ClientError> {
    let json = serde_json::to_string(event)?;
    Ok(Message::Text(json.into()))
}

fn enter_room(name: &str, room: &str) -> ClientEvent {
    ClientEvent::EnterRoom(EnterRoomPayload {
        name: name.to_string(),
        room: room.to_string(),
    })
}

/// Frames to send for a typed line, in order
fn outgoing_events(name: &str, input: UserInput) -> Vec<ClientEvent> {
    match input {
        UserInput::Join(room) => vec![enter_room(name, &room)],
        UserInput::Say(text) => vec![
            ClientEvent::Activity(name.to_string()),
            ClientEvent::Message(MessagePayload {
                name: name.to_string(),
                text,
            }),
        ],
        UserInput::Quit | UserInput::Invalid(_) => Vec::new(),
    }
}

/// Run the WebSocket client session
///
/// Returns `Ok(())` when the user quits and an error when the connection is lost.
pub async fn run_client_session(url: &str, name: &str, room: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}' in room '{}'. Type messages and press Enter to send.\n\
         Use /join <room> to switch rooms and /quit to exit.\n",
        name, room
    );

    let (mut write, mut read) = ws_stream.split();

    write
        .send(encode(&enter_room(name, room))?)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    let name_for_read = name.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerEvent>(text.as_str()) {
                        Ok(event) => MessageFormatter::format_event(&event, &name_for_read),
                        Err(_) => MessageFormatter::format_raw_message(text.as_str()),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // rustyline is synchronous, so it gets its own thread
    let prompt_text = prompt(name);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt_text) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let name_for_write = name.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let input = UserInput::parse(&line);
            match &input {
                UserInput::Quit => break,
                UserInput::Invalid(reason) => {
                    println!("{}", reason);
                    redisplay_prompt(&name_for_write);
                    continue;
                }
                _ => {}
            }

            for event in outgoing_events(&name_for_write, input) {
                let frame = match encode(&event) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::error!("{}", e);
                        continue;
                    }
                };
                if let Err(e) = write.send(frame).await {
                    tracing::warn!("Failed to send message: {}", e);
                    write_error = true;
                    break;
                }
            }
            if write_error {
                break;
            }
        }

        if !write_error {
            write.close().await.ok();
        }
        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(true) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(true) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
    }

    Ok(())
}
