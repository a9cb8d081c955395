use std::sync::Arc;
use futures::{StreamExt, SinkExt};
use log::{info, warn};
use tokio::net::TcpListener;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tokio::sync::{Mutex, mpsc};
use uuid::Uuid;

use crate::brake_thermal::control;
use crate::state::SharedSimState;

#[derive(Debug)]
struct ClientMessage {
    msg_type: String,
    value: f64,
}

impl ClientMessage {
    fn from_json(txt: &str) -> Option<Self> {
        let v = serde_json::from_str::<serde_json::Value>(txt).ok()?;

        Some(ClientMessage {
            msg_type: v.get("type")?.as_str()?.to_string(),
            value: v.get("value").and_then(|x| x.as_f64()).unwrap_or(0.0),
        })
    }
}

pub async fn start_websocket_server(state: Arc<Mutex<SharedSimState>>) {
    let listener = TcpListener::bind("0.0.0.0:9001")
        .await
        .expect("Failed to bind WebSocket port");

    info!("🌐 WebSocket listening on ws://localhost:9001");

    loop {
        let (raw, _) = match listener.accept().await {
            Ok(pair) => pair,
            Err(_) => continue,
        };
        let state_clone = Arc::clone(&state);

        tokio::spawn(async move {
            let ws = match accept_async(raw).await {
                Ok(ws) => ws,
                Err(_) => return,
            };
            let (mut write, mut read) = ws.split();

            // -------------------------------
            // 1) Create outgoing message channel
            // -------------------------------
            let (tx, mut rx) = mpsc::unbounded_channel::<String>();
            let client_id = Uuid::new_v4().to_string();

            {
                let mut shared = state_clone.lock().await;
                shared.register_client(client_id.clone(), tx.clone());
            }

            // -------------------------------
            // 2) Spawn send-loop task
            // -------------------------------
            tokio::spawn(async move {
                while let Some(msg) = rx.recv().await {
                    let _ = write.send(Message::Text(msg)).await;
                }
            });

            info!("🟢 Client connected: {}", client_id);

            // Send welcome through the outgoing TX channel
            let welcome = format!(
                r#"{{"type":"welcome","client_id":"{}"}}"#,
                client_id
            );
            let _ = tx.send(welcome);

            // -------------------------------
            // 3) Main receive loop
            // -------------------------------
            while let Some(msg) = read.next().await {
                let msg = match msg {
                    Ok(m) => m,
                    Err(_) => break,
                };

                if !msg.is_text() {
                    continue;
                }
                let text = match msg.to_text() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                if text.contains("\"type\":\"ping\"") {
                    let _ = tx.send("{\"type\":\"pong\"}".into());
                    continue;
                }

                let parsed = match ClientMessage::from_json(text) {
                    Some(v) => v,
                    None => continue,
                };

                let mut shared = state_clone.lock().await;
                let params = shared.params;
                match parsed.msg_type.as_str() {
                    "set_deceleration" => {
                        control::set_control_deceleration(&mut shared.sim, &params, parsed.value)
                    }
                    "set_acceleration" => {
                        control::set_control_acceleration(&mut shared.sim, &params, parsed.value)
                    }
                    "brake" => control::trigger_brake(&mut shared.sim),
                    "accelerate" => control::trigger_accelerate(&mut shared.sim, &params),
                    "reset" => control::trigger_reset(&mut shared.sim, &params),
                    other => warn!("unknown message type: {}", other),
                }
            }

            info!("🔴 Client disconnected: {}", client_id);
            let mut shared = state_clone.lock().await;
            shared.remove_client(&client_id);
        });
    }
}
