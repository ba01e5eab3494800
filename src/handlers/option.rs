use futures::future::BoxFuture;

use crate::command::Command;
use crate::handlers::illegal_parameters;
use crate::session::{OptionName, Session};
use crate::Error;

/// `OPTION MIME`: from now on, text blocks start with a MIME header.
///
/// Ref: RFC 2229 section 3.10
pub fn handle(session: &mut Session, command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        let option = match command.params.as_slice() {
            [name] => name.parse::<OptionName>().ok(),
            _ => None,
        };

        let Some(option) = option else {
            return illegal_parameters(session).await;
        };

        session.options.enable(option);
        session.write_code(250, "ok - using MIME headers").await?;
        Ok(())
    })
}
