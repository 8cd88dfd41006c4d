//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use ampress_static::{SiteConfig, StaticBuilder};

use crate::reload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Path to the site configuration file
    pub config_path: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("site.toml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load site config: {0}")]
    ConfigError(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    site: SiteConfig,
    hub: ReloadHub,
}

/// Development server: builds the site, serves it, rebuilds on change.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let site = SiteConfig::load_or_default(&self.config.config_path)
            .map_err(|e| ServerError::ConfigError(e.to_string()))?;

        // Initial build with the reload client enabled. A failure is not
        // fatal; the next successful rebuild replaces whatever is on disk.
        if let Err(e) = StaticBuilder::new(site.clone())
            .with_live_reload(true)
            .build()
            .await
        {
            tracing::warn!("Initial build failed: {}", e);
        }

        let output_dir = site.build.output_dir.clone();

        // Watch content, configuration, and any configured stylesheets
        let mut watch_paths = vec![
            site.build.content_dir.clone(),
            self.config.config_path.clone(),
        ];
        for style in &site.build.styles {
            watch_paths.push(PathBuf::from(style));
        }

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            site,
            hub: ReloadHub::new(),
        }));

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        // Spawn file watch handler
        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        // Build router
        let app = Router::new()
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .fallback_service(ServeDir::new(&output_dir))
            .with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        // Start server
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events. Rebuilds run inside the event loop, so they
/// are serialized.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    match event {
        WatchEvent::ConfigModified(path) => {
            tracing::info!("Config modified: {}", path.display());

            let config_path = {
                let state = state.read().await;
                state.config.config_path.clone()
            };

            match SiteConfig::load_or_default(&config_path) {
                Ok(site) => {
                    let mut state = state.write().await;
                    state.site = site;
                }
                Err(e) => {
                    tracing::warn!("Keeping previous config: {}", e);
                }
            }

            rebuild(state).await;
        }

        WatchEvent::ContentModified(path) => {
            tracing::info!("Content modified: {}", path.display());
            rebuild(state).await;
        }

        WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
            rebuild(state).await;
        }
    }
}

/// Rebuild the site and notify connected pages.
async fn rebuild(state: &Arc<RwLock<ServerState>>) {
    let site = {
        let state = state.read().await;
        state.site.clone()
    };

    match StaticBuilder::new(site).with_live_reload(true).build().await {
        Ok(result) => {
            tracing::info!("Rebuilt {} pages in {}ms", result.pages, result.duration_ms);

            let state = state.read().await;
            state.hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::warn!("Rebuild failed: {}", e);
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    // Send connected message
    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let (host, port) = {
        let state = state.read().await;
        (state.config.host.clone(), state.config.port)
    };

    let script = reload_client_script(&format!("ws://{}:{}/__reload", host, port));
    ([("content-type", "application/javascript")], script)
}
