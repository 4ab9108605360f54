//! WebSocket connection handlers.
//!
//! The upgrade is the `connect` event and the end of the socket is the
//! `disconnect` event; every text frame in between is a `ClientEvent`.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, Stream, StreamExt},
};
use tokio::sync::{mpsc, oneshot};

use crate::{
    domain::ConnectionId,
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::RoomBroadcaster,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// # Arguments
///
/// * `rx` - Channel receiver for notifications addressed to this connection
/// * `sender` - WebSocket sink to send messages to this client
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Dispatch one inbound text frame to the broadcaster
async fn dispatch_client_event(broadcaster: &RoomBroadcaster, id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Ignoring malformed event from '{}': {}", id, e);
            return;
        }
    };

    match event {
        ClientEvent::EnterRoom(payload) => {
            broadcaster
                .enter_room(id, payload.name, payload.room)
                .await;
        }
        ClientEvent::Message(payload) => {
            if broadcaster
                .send_message(id, payload.name, payload.text)
                .await
                .is_none()
            {
                tracing::debug!("'{}' sent a message outside of any room", id);
            }
        }
        ClientEvent::Activity(name) => {
            broadcaster.notify_activity(id, name).await;
        }
    }
}

/// Dispatch frames until the client leaves or `stop` fires
///
/// `stop` is only observed between frames, so an event that has been read is
/// always dispatched to completion.
async fn receive_loop<S>(
    mut receiver: S,
    mut stop: oneshot::Receiver<()>,
    broadcaster: &RoomBroadcaster,
    id: &ConnectionId,
) where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        let msg = tokio::select! {
            biased;
            msg = receiver.next() => msg,
            _ = &mut stop => {
                tracing::debug!("Stopped reading from '{}'", id);
                break;
            }
        };

        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::warn!("WebSocket error on '{}': {}", id, e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => {
                tracing::debug!("Received from '{}': {}", id, text.as_str());
                dispatch_client_event(broadcaster, id, text.as_str()).await;
            }
            Message::Close(_) => {
                tracing::info!("Client '{}' requested close", id);
                break;
            }
            Message::Binary(_) => {
                tracing::debug!("Ignoring binary frame from '{}'", id);
            }
            _ => {}
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let id = ConnectionId::generate();
    tracing::info!("User {} connected", id);

    let (sender, receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    state.room_broadcaster.on_connect(id.clone(), tx).await;

    // Spawn a task to forward notifications to this client
    let mut send_task = pusher_loop(rx, sender);

    // Spawn a task to receive events from this client
    let (stop_tx, stop_rx) = oneshot::channel();
    let id_for_recv = id.clone();
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        receive_loop(
            receiver,
            stop_rx,
            &state_for_recv.room_broadcaster,
            &id_for_recv,
        )
        .await;
    });

    // The receiver is stopped between frames, never aborted
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => {
            let _ = stop_tx.send(());
            if let Err(e) = recv_task.await {
                tracing::warn!("Receive task for '{}' failed: {}", id, e);
            }
        }
    };

    match state.room_broadcaster.disconnect(&id).await {
        Some(user) => tracing::info!(
            "User {} ('{}') disconnected from room '{}'",
            id,
            user.name,
            user.room
        ),
        None => tracing::info!("User {} disconnected", id),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures_util::stream;
    use hiroba_shared::time::SystemClock;
    use tokio::sync::Mutex;

    use super::*;
    use crate::{
        domain::SharedSessionStore,
        infrastructure::{
            dto::websocket::{EnterRoomPayload, RoomListDto, ServerEvent},
            message_pusher::WebSocketMessagePusher,
            repository::InMemorySessionStore,
        },
    };

    fn broadcaster() -> (SharedSessionStore, RoomBroadcaster) {
        let sessions: SharedSessionStore = Arc::new(Mutex::new(InMemorySessionStore::new()));
        let broadcaster = RoomBroadcaster::new(
            sessions.clone(),
            Arc::new(WebSocketMessagePusher::new()),
            Arc::new(SystemClock),
        );
        (sessions, broadcaster)
    }

    fn text_frame(event: &ClientEvent) -> Result<Message, axum::Error> {
        Ok(Message::Text(serde_json::to_string(event).unwrap().into()))
    }

    fn received_events(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(json) = rx.try_recv() {
            events.push(serde_json::from_str(&json).unwrap());
        }
        events
    }

    #[tokio::test]
    async fn test_stop_lets_received_event_finish() {
        // テスト項目: 停止要求が来ていても、読み込み済みのイベントは最後まで処理される
        // given (前提条件):
        let (sessions, broadcaster) = broadcaster();
        let id = ConnectionId::new("c1".to_string()).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        broadcaster.on_connect(id.clone(), tx).await;

        let enter = ClientEvent::EnterRoom(EnterRoomPayload {
            name: "Alice".to_string(),
            room: "lobby".to_string(),
        });
        let frames = stream::iter(vec![text_frame(&enter)]).chain(stream::pending());
        let (stop_tx, stop_rx) = oneshot::channel();
        stop_tx.send(()).unwrap();

        // when (操作):
        tokio::time::timeout(
            Duration::from_secs(1),
            receive_loop(frames, stop_rx, &broadcaster, &id),
        )
        .await
        .unwrap();

        // then (期待する結果): 入室のシーケンスがルーム一覧の通知まで完了している
        let user = sessions.lock().await.find_user(&id).unwrap();
        assert_eq!(user.room, "lobby");
        let events = received_events(&mut rx);
        assert_eq!(
            events.last(),
            Some(&ServerEvent::RoomList(RoomListDto {
                rooms: vec!["lobby".to_string()]
            }))
        );
    }

    #[tokio::test]
    async fn test_stop_ends_idle_loop() {
        // テスト項目: フレーム待ちの間に停止要求が来るとループが終わる
        // given (前提条件):
        let (sessions, broadcaster) = broadcaster();
        let id = ConnectionId::new("c1".to_string()).unwrap();
        let frames = stream::pending::<Result<Message, axum::Error>>();
        let (stop_tx, stop_rx) = oneshot::channel();

        // when (操作):
        let receiving = receive_loop(frames, stop_rx, &broadcaster, &id);
        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(1), receiving).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(sessions.lock().await.users().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_and_binary_frames_are_skipped() {
        // テスト項目: 解釈できないフレームとバイナリフレームは無視され、後続のイベントは処理される
        // given (前提条件):
        let (sessions, broadcaster) = broadcaster();
        let id = ConnectionId::new("c1".to_string()).unwrap();
        let enter = ClientEvent::EnterRoom(EnterRoomPayload {
            name: "Alice".to_string(),
            room: "lobby".to_string(),
        });
        let frames = stream::iter(vec![
            Ok(Message::Text("not json".to_string().into())),
            Ok(Message::Binary(vec![1u8, 2, 3].into())),
            text_frame(&enter),
        ]);
        let (_stop_tx, stop_rx) = oneshot::channel();

        // when (操作): ストリームの終端でループが終わる
        receive_loop(frames, stop_rx, &broadcaster, &id).await;

        // then (期待する結果):
        let users = sessions.lock().await.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Alice");
    }
}
