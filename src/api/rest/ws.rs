use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{Sink, SinkExt, Stream, StreamExt};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::models::matching::MatchReport;
use crate::state::AppState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, receiver) = socket.split();
    let rx = state.match_events_tx.subscribe();

    info!("websocket client connected");
    forward_match_events(sender, receiver, rx).await;
    info!("websocket client disconnected");
}

/// Pushes match reports to the client until either side goes away. The
/// other half is cancelled so its broadcast subscription is released.
async fn forward_match_events<S, R>(
    mut sender: S,
    mut receiver: R,
    mut rx: broadcast::Receiver<MatchReport>,
) where
    S: Sink<Message> + Unpin + Send + 'static,
    R: Stream<Item = Result<Message, axum::Error>> + Unpin + Send + 'static,
{
    let mut send_task = tokio::spawn(async move {
        loop {
            let report = match rx.recv().await {
                Ok(report) => report,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "websocket client lagging; dropped match events");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let json = match serde_json::to_string(&report) {
                Ok(json) => json,
                Err(err) => {
                    warn!(error = %err, "failed to serialize match report for ws");
                    continue;
                }
            };

            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(_msg)) = receiver.next().await {}
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
            let _ = recv_task.await;
        },
        _ = &mut recv_task => {
            send_task.abort();
            let _ = send_task.await;
        },
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::ws::Message;
    use chrono::Utc;
    use futures::channel::mpsc;
    use futures::{stream, StreamExt};
    use tokio::sync::broadcast;
    use uuid::Uuid;

    use super::forward_match_events;
    use crate::models::matching::{MatchReport, MatchStatus};

    fn report() -> MatchReport {
        MatchReport {
            id: Uuid::new_v4(),
            order_id: "ORD1".to_string(),
            min_score: 70,
            status: MatchStatus::NoSuitableVehicle,
            best_match: None,
            matches: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn closed_client_releases_its_subscription() {
        let (events_tx, _) = broadcast::channel::<MatchReport>(4);
        let (sink, _outgoing) = mpsc::channel::<Message>(4);

        forward_match_events(
            sink,
            stream::empty::<Result<Message, axum::Error>>(),
            events_tx.subscribe(),
        )
        .await;

        assert_eq!(events_tx.receiver_count(), 0);
    }

    #[tokio::test]
    async fn reports_are_forwarded_as_json_text() {
        let (events_tx, events_rx) = broadcast::channel(4);
        events_tx.send(report()).unwrap();
        drop(events_tx);
        let (sink, mut outgoing) = mpsc::channel::<Message>(4);

        forward_match_events(
            sink,
            stream::pending::<Result<Message, axum::Error>>(),
            events_rx,
        )
        .await;

        match outgoing.next().await {
            Some(Message::Text(text)) => assert!(text.contains("\"order_id\":\"ORD1\"")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
