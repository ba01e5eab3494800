use futures::future::BoxFuture;

use crate::command::Command;
use crate::session::Session;
use crate::Error;

const HELP: &str = "\
CLIENT info              -- identify client to server
OPTION MIME              -- use MIME headers
SHOW SERVER              -- provide site-specific information
SHOW DB                  -- list all accessible databases
SHOW STRAT               -- list available matching strategies
STATUS                   -- display timing information
HELP                     -- display this help information
QUIT                     -- terminate connection
";

/// `HELP`: a short summary of the commands.
///
/// Ref: RFC 2229 section 3.8
pub fn handle(session: &mut Session, _command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        session.write_code(113, "help text follows").await?;
        session.write_text_block(HELP).await?;
        session.write_code(250, "ok").await?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support;

    #[tokio::test]
    async fn help() {
        let (client, mut session) = test_support::session();

        test_support::dispatch(&mut session, "HELP").await;

        let output = test_support::output(client, session).await;
        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(lines[0], "113 help text follows");
        assert!(lines[1].starts_with("CLIENT info"));
        assert_eq!(lines[lines.len() - 3], ".");
        assert_eq!(lines[lines.len() - 2], "250 ok");
        assert_eq!(lines[lines.len() - 1], "");
    }

    #[tokio::test]
    async fn help_with_mime() {
        let (client, mut session) = test_support::session();

        test_support::dispatch(&mut session, "OPTION MIME").await;
        test_support::dispatch(&mut session, "HELP").await;

        let output = test_support::output(client, session).await;
        assert!(output.starts_with(
            "250 ok - using MIME headers\r\n\
             113 help text follows\r\n\
             Content-type: text/plain; charset=utf-8\r\n\
             Content-transfer-encoding: 8bit\r\n\
             \r\n\
             CLIENT info"
        ));
        assert!(output.ends_with("\r\n.\r\n250 ok\r\n"));
    }
}
