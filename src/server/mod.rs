//! HTTP server implementation for fileserv.
//!
//! This module ties the pieces together: configuration, the worker pool, the
//! accept loop, the per-connection dispatcher with its method handlers, and
//! the response writer.

mod response;
mod config;
mod error;
mod dispatch;
mod methods;
mod pool;
mod writer;
mod http_server;

// Re-export public items
pub use response::{Body, HttpResponse, StatusCode};
pub use config::{parse_properties, ConfigError, ServerConfig, REGISTERED_PORTS};
pub use error::Error;
pub use dispatch::Dispatcher;
pub use pool::WorkerPool;
pub use writer::write_response;
pub use http_server::{bind_listener, HttpServer, LISTEN_BACKLOG, QUEUE_CAPACITY};
