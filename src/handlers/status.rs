use futures::future::BoxFuture;

use crate::command::Command;
use crate::session::Session;
use crate::Error;

/// `STATUS`: reports the session's message id.
pub fn handle(session: &mut Session, _command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        let message = format!("status [{}]", session.id);
        session.write_code(210, message).await?;
        Ok(())
    })
}
