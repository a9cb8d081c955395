mod brake_thermal;
mod net;
mod state;

use crate::brake_thermal::types::SimParams;
use crate::net::start_websocket_server;
use crate::state::SharedSimState;

use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{interval, Duration};

#[tokio::main]
async fn main() {
    env_logger::init();

    info!("🚀 Starting brake thermal simulation server...");

    let params = SimParams::default();
    params
        .validate()
        .expect("Invalid simulation parameters");

    let state = Arc::new(Mutex::new(SharedSimState::new(params)));

    // Start WebSocket server
    tokio::spawn(start_websocket_server(Arc::clone(&state)));

    // Fixed timestep: one simulation frame per 100 ms
    let mut ticker = interval(Duration::from_secs_f64(params.dt));

    loop {
        ticker.tick().await;

        let mut shared = state.lock().await;
        shared.advance_tick();
        shared.broadcast_snapshot();
    }
}
