use futures::future::BoxFuture;
use itertools::Itertools;

use crate::command::Command;
use crate::handlers::illegal_parameters;
use crate::session::Session;
use crate::Error;

/// `CLIENT text`: the client identifies itself. The text is only kept for logging.
///
/// Ref: RFC 2229 section 3.6
pub fn handle(session: &mut Session, command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        if command.params.is_empty() {
            return illegal_parameters(session).await;
        }

        // Clients are not required to quote the text.
        session.client = command.params.iter().join(" ");
        session.write_code(250, "ok").await?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support;

    #[tokio::test]
    async fn quoted_client() {
        let (client, mut session) = test_support::session();

        test_support::dispatch(&mut session, "CLIENT \"dict 1.12.1/rf on Linux\"").await;

        assert_eq!(session.client, "dict 1.12.1/rf on Linux");
        let output = test_support::output(client, session).await;
        assert_eq!(output, "250 ok\r\n");
    }

    #[tokio::test]
    async fn unquoted_client() {
        let (client, mut session) = test_support::session();

        test_support::dispatch(&mut session, "client my dict client").await;

        assert_eq!(session.client, "my dict client");
        let output = test_support::output(client, session).await;
        assert_eq!(output, "250 ok\r\n");
    }

    #[tokio::test]
    async fn missing_text() {
        let (client, mut session) = test_support::session();

        test_support::dispatch(&mut session, "CLIENT").await;

        assert_eq!(session.client, "");
        let output = test_support::output(client, session).await;
        assert_eq!(output, "501 syntax error, illegal parameters\r\n");
    }
}
