use futures::future::BoxFuture;
use tracing::debug;

use crate::command::Command;
use crate::session::Session;
use crate::Error;

pub fn handle(session: &mut Session, command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        debug!("Unknown command {}", command.name);
        session.write_code(500, "unknown command").await?;
        Ok(())
    })
}
