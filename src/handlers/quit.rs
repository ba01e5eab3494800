use futures::future::BoxFuture;

use crate::command::Command;
use crate::session::Session;
use crate::Error;

/// `QUIT`: says goodbye and hangs up. The session loop stops at its next read.
///
/// Ref: RFC 2229 section 3.9
pub fn handle(session: &mut Session, _command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        session.write_code(221, "bye").await?;
        session.connection.shutdown().await?;
        Ok(())
    })
}
