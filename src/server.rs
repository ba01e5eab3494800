use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, instrument, warn};

use crate::codec::{LineCodec, DEFAULT_MAX_LINE_LENGTH};
use crate::command::Command;
use crate::config::Config;
use crate::connection::Connection;
use crate::handlers;
use crate::registry::Registry;
use crate::session::{Session, SessionState};
use crate::Error;

const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// What every session shares: the server name and the handler table. Never changes after
/// startup.
pub struct Server {
    pub name: String,
    pub registry: Registry,
    pub max_line_length: usize,
}

impl Server {
    pub fn new(name: impl Into<String>, registry: Registry) -> Server {
        Server {
            name: name.into(),
            registry,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    pub fn from_config(config: &Config) -> Server {
        Server {
            max_line_length: config.max_line_length,
            ..Server::new(config.name.clone(), handlers::registry())
        }
    }
}

pub async fn run(config: Config) -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let server = Arc::new(Server::from_config(&config));

    info!("Dict server {} listening on {}", server.name, listener.local_addr()?);

    serve(listener, server).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, server: Arc<Server>) -> Result<(), Error> {
    loop {
        let (socket, client_address) = listener.accept().await?;
        let server = server.clone();
        info!("Accepted connection from {:?}", client_address);

        tokio::spawn(async move {
            handle_connection(socket, client_address, server).await;
        });
    }
}

#[instrument(
    name = "connection",
    skip(stream, client_address, server),
    fields(connection_id, client_address, session_id)
)]
async fn handle_connection(stream: TcpStream, client_address: SocketAddr, server: Arc<Server>) {
    let codec = LineCodec::new(server.max_line_length);
    let conn = Connection::with_codec(stream, codec);
    let session = Session::new(conn, server);

    tracing::Span::current()
        .record("connection_id", session.connection.id.to_string())
        .record("client_address", client_address.to_string())
        .record("session_id", session.id.as_str());

    handle(session).await;
}

/// Runs a session until its connection fails or ends: greet, then read, parse and dispatch one
/// line at a time. The session, and with it the connection, is dropped on return.
pub async fn handle(mut session: Session) {
    let greet = session.server.registry.greeter();
    if let Err(e) = greet(&mut session).await {
        warn!("Failed to send greeting: {}", e);
    }
    session.transition(SessionState::Active);

    loop {
        let line = match session.connection.read_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Connection closed");
                break;
            }
            Err(e) => {
                info!("Connection read failed: {}", e);
                break;
            }
        };

        let line = line.trim_matches(WHITESPACE);
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Discarding line {:?}: {}", line, e);
                continue;
            }
        };

        dispatch(&mut session, command).await;
    }

    session.transition(SessionState::Closed);
}

/// Routes `command` to its handler, or to the unknown command handler, and waits for it.
pub async fn dispatch(session: &mut Session, command: Command) {
    info!("Incoming command from {}: {}", session.id, command.name);

    let registry = &session.server.registry;
    let handler = match registry.find(&command.name) {
        Some(handler) => handler,
        None => {
            debug!("No handler for {}", command.name);
            registry.unknown()
        }
    };

    if let Err(e) = handler.call(session, command).await {
        warn!("Handler failed: {}", e);
    }
}
