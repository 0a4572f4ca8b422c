//! HTTP server implementation.

use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;

use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};

use crate::content::{ContentStore, FsStore, MediaTypes};
use crate::server::config::ServerConfig;
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;
use crate::server::pool::WorkerPool;

/// Pending connections the kernel queues before `accept`.
pub const LISTEN_BACKLOG: i32 = 128;

/// Accepted connections queued for the workers before `accept` blocks.
pub const QUEUE_CAPACITY: usize = 64;

/// An HTTP server.
///
/// The calling thread runs the accept loop; each accepted connection is
/// handed to the worker pool, which serves one request on it and closes it.
pub struct HttpServer<S: ContentStore + 'static = FsStore> {
    dispatcher: Arc<Dispatcher<S>>,
    pool: WorkerPool,
}

impl HttpServer<FsStore> {
    /// Create a server over the local filesystem and start its workers.
    pub fn new(config: ServerConfig, media: MediaTypes) -> io::Result<Self> {
        let workers = config.workers;
        let dispatcher = Dispatcher::new(Arc::new(config), Arc::new(media));
        Self::with_dispatcher(dispatcher, workers)
    }
}

impl<S: ContentStore + 'static> HttpServer<S> {
    /// Create a server around an existing dispatcher with `workers` threads.
    pub fn with_dispatcher(dispatcher: Dispatcher<S>, workers: usize) -> io::Result<Self> {
        Ok(Self {
            dispatcher: Arc::new(dispatcher),
            pool: WorkerPool::new(workers, QUEUE_CAPACITY)?,
        })
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        self.dispatcher.config()
    }

    /// Bind the configured port on all interfaces.
    pub fn bind(&self) -> io::Result<TcpListener> {
        bind_listener(self.config().addr())
    }

    /// Bind and serve until the accept loop fails.
    pub fn start(&self) -> Result<(), Error> {
        let listener = self.bind()?;
        info!("Server listening on http://{}", listener.local_addr()?);
        self.run(listener)
    }

    /// Accept connections on `listener` and hand them to the workers.
    ///
    /// Returns only when `accept` fails with anything other than an
    /// interrupted system call.
    pub fn run(&self, listener: TcpListener) -> Result<(), Error> {
        loop {
            let (stream, peer) = match listener.accept() {
                Ok(accepted) => accepted,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("Error accepting connection: {e}");
                    return Err(e.into());
                }
            };

            debug!("New connection accepted {}:{}", peer.ip(), peer.port());
            let dispatcher = Arc::clone(&self.dispatcher);
            self.pool.execute(move || handle_connection(&dispatcher, stream, peer))?;
        }
    }

    /// Stop the workers after they finish queued connections.
    pub fn shutdown(self) {
        info!("Shutting down server...");
        self.pool.shutdown();
    }
}

/// Create a listening socket on `addr` with `SO_REUSEADDR` set.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    Ok(socket.into())
}

/// Serve one connection on a worker thread and log how it ended.
fn handle_connection<S: ContentStore>(dispatcher: &Dispatcher<S>, stream: TcpStream, peer: SocketAddr) {
    match dispatcher.serve(stream) {
        Ok(()) => debug!("Connection from {peer} closed"),
        Err(e) if e.status().is_some() => warn!("{peer}: {e}"),
        Err(e) => error!("Error handling connection from {peer}: {e}"),
    }
}
