//! Development server with live reload for ampress sites.
//!
//! Watches the content directory and site configuration, rebuilds on
//! change, and tells connected pages to reload over a WebSocket.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{ReloadHub, ReloadMessage};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
