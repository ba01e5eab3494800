use futures::future::BoxFuture;

use crate::command::Command;
use crate::handlers::illegal_parameters;
use crate::session::Session;
use crate::Error;

/// `SHOW SERVER`, `SHOW DB` and `SHOW STRAT`. There is no database layer behind this server, so
/// the database and strategy listings are always empty.
///
/// Ref: RFC 2229 section 3.5
pub fn handle(session: &mut Session, command: Command) -> BoxFuture<'_, Result<(), Error>> {
    Box::pin(async move {
        let [what] = command.params.as_slice() else {
            return illegal_parameters(session).await;
        };

        match what.to_uppercase().as_str() {
            "SERVER" | "SERV" => {
                let info = format!("{}\n", session.server.name);
                session.write_code(114, "server information follows").await?;
                session.write_text_block(info).await?;
                session.write_code(250, "ok").await?;
            }
            "DB" | "DATABASES" => session.write_code(554, "no databases present").await?,
            "STRAT" | "STRATEGIES" => {
                session.write_code(555, "no strategies available").await?
            }
            _ => return illegal_parameters(session).await,
        }

        Ok(())
    })
}
