use futures::future::BoxFuture;

use crate::session::Session;
use crate::Error;

/// Sends the 220 banner: server name, capabilities and the session's message id.
pub fn greet(session: &mut Session) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        let banner = format!("{} <mime> <{}>", session.server.name, session.id);
        session.write_code(220, banner).await?;
        Ok(())
    })
}
