//! Protocol level commands that need no dictionary database.

pub mod client;
pub mod handshake;
pub mod help;
pub mod option;
pub mod quit;
pub mod show;
pub mod status;
pub mod unknown;

use crate::registry::Registry;
use crate::session::Session;
use crate::Error;

/// The table the server runs with.
pub fn registry() -> Registry {
    Registry::builder()
        .greeter(handshake::greet)
        .unknown(crate::registry::FnHandler(unknown::handle))
        .command("CLIENT", client::handle)
        .command("HELP", help::handle)
        .command("OPTION", option::handle)
        .command("QUIT", quit::handle)
        .command("SHOW", show::handle)
        .command("STATUS", status::handle)
        .build()
}

/// Replies 501, for commands called with the wrong parameters.
pub(crate) async fn illegal_parameters(session: &mut Session) -> Result<(), Error> {
    session
        .write_code(501, "syntax error, illegal parameters")
        .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::io::{AsyncReadExt, DuplexStream};

    use crate::command::Command;
    use crate::connection::Connection;
    use crate::server::{self, Server};
    use crate::session::Session;

    pub fn session() -> (DuplexStream, Session) {
        let (client, stream) = tokio::io::duplex(4096);
        let server = Arc::new(Server::new("dict.example.org", super::registry()));
        (client, Session::new(Connection::new(stream), server))
    }

    pub async fn dispatch(session: &mut Session, line: &str) {
        let command = Command::parse(line).unwrap();
        server::dispatch(session, command).await;
    }

    /// Everything written to the client, once the session is gone.
    pub async fn output(mut client: DuplexStream, session: Session) -> String {
        drop(session);
        let mut output = String::new();
        client.read_to_string(&mut output).await.unwrap();
        output
    }
}
