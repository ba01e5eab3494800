use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::codec::CodecError;
use crate::connection::Connection;
use crate::response::Response;
use crate::server::Server;

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Where a session is in its life. It only ever moves forward:
/// `Handshake` -> `Active` -> `Closed`.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum SessionState {
    /// Created, greeting not sent yet.
    Handshake,
    /// Greeting sent, reading commands.
    Active,
    /// The connection failed or ended. Terminal.
    Closed,
}

/// Options a client can turn on with `OPTION <name>`.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum OptionName {
    #[strum(serialize = "MIME")]
    Mime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Precede text blocks with a MIME header.
    pub mime: bool,
}

impl Options {
    pub fn enable(&mut self, option: OptionName) {
        match option {
            OptionName::Mime => self.mime = true,
        }
    }
}

/// State that lasts as long as one client connection.
pub struct Session {
    pub id: String,
    pub client: String,
    pub options: Options,
    pub state: SessionState,
    pub connection: Connection,
    pub server: Arc<Server>,
}

impl Session {
    pub fn new(connection: Connection, server: Arc<Server>) -> Session {
        Session {
            id: generate_id(&server.name),
            client: String::new(),
            options: Options::default(),
            state: SessionState::Handshake,
            connection,
            server,
        }
    }

    /// Writes a `<code> <message>` status line.
    pub async fn write_code(
        &mut self,
        code: u16,
        message: impl Into<String>,
    ) -> Result<(), CodecError> {
        self.connection.write(Response::status(code, message)).await
    }

    /// Writes a dot-terminated text block, with the MIME header if the client asked for it.
    pub async fn write_text_block(&mut self, body: impl Into<String>) -> Result<(), CodecError> {
        let response = Response::text(self.options.mime, body);
        self.connection.write(response).await
    }

    pub(crate) fn transition(&mut self, state: SessionState) {
        debug!(from = %self.state, to = %state, "session state changed");
        self.state = state;
    }
}

/// Builds a message id of the form `<unix nanos>.<sequence>@<server name>`.
///
/// The process-wide sequence keeps ids distinct when the clock is coarse. They are meant for
/// logs and the greeting, not as secrets.
pub fn generate_id(server_name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let sequence = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    format!("{}.{}@{}", nanos, sequence, server_name)
}
