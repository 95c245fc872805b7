use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use venn_core::storage::JsonFileStore;

mod commands;
mod config;
mod session;

use commands::parse_command;
use config::BackendConfig;
use session::{apply_shared, Reply, Session};

// Application State
struct AppState {
    session: Mutex<Session<JsonFileStore>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = match JsonFileStore::open(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot open data directory {}: {}", config.data_dir.display(), e);
            std::process::exit(1);
        }
    };

    let session = Session::open(config.editor.clone(), store);
    info!(
        "Using data directory {} ({} segments loaded)",
        session.store().dir().display(),
        session.editor().segments().len()
    );

    let shared_state = Arc::new(AppState {
        session: Mutex::new(session),
    });

    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Cannot bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    info!("listening on {}", config.bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}

async fn root() -> String {
    format!("Hello from Venn Backend! (engine {})", venn_core::version())
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("Client connected");
    let (mut sender, mut receiver) = socket.split();

    // Send initial state
    let initial = state.session.lock().await.state().to_frame();
    if sender.send(Message::Text(initial)).await.is_err() {
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            break;
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let replies = match parse_command(&text) {
            Ok(command) => apply_shared(&state.session, command).await,
            Err(e) => {
                warn!("Rejected message {:?}: {}", text, e);
                vec![Reply::bad_command(&e)]
            }
        };

        for reply in replies {
            if sender.send(Message::Text(reply.to_frame())).await.is_err() {
                return;
            }
        }
    }

    info!("Client disconnected");
}
