use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::command::Command;
use crate::handlers;
use crate::session::Session;
use crate::Error;

/// Produces the reply to one command. It may write to the session's connection and change the
/// session's client or options.
pub trait Handler: Send + Sync {
    fn call<'a>(
        &'a self,
        session: &'a mut Session,
        command: Command,
    ) -> BoxFuture<'a, Result<(), Error>>;
}

pub type HandlerFn = for<'a> fn(&'a mut Session, Command) -> BoxFuture<'a, Result<(), Error>>;

/// Sends the greeting, once per session before any command is read.
pub type GreeterFn = for<'a> fn(&'a mut Session) -> BoxFuture<'a, Result<(), Error>>;

/// Adapts a plain `fn` to [`Handler`].
pub struct FnHandler(pub HandlerFn);

impl Handler for FnHandler {
    fn call<'a>(
        &'a self,
        session: &'a mut Session,
        command: Command,
    ) -> BoxFuture<'a, Result<(), Error>> {
        (self.0)(session, command)
    }
}

/// Verb to handler table, fixed once built.
pub struct Registry {
    handlers: HashMap<String, Arc<dyn Handler>>,
    greeter: GreeterFn,
    unknown: Arc<dyn Handler>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up the handler for `verb`, ignoring case.
    pub fn find(&self, verb: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(&verb.to_uppercase()).cloned()
    }

    pub fn greeter(&self) -> GreeterFn {
        self.greeter
    }

    /// The handler used for verbs with no entry.
    pub fn unknown(&self) -> Arc<dyn Handler> {
        self.unknown.clone()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<String, Arc<dyn Handler>>,
    greeter: Option<GreeterFn>,
    unknown: Option<Arc<dyn Handler>>,
}

impl RegistryBuilder {
    pub fn command(self, verb: &str, handler: HandlerFn) -> Self {
        self.handler(verb, FnHandler(handler))
    }

    /// Registers `handler` for `verb`, replacing an earlier registration.
    pub fn handler(mut self, verb: &str, handler: impl Handler + 'static) -> Self {
        self.handlers.insert(verb.to_uppercase(), Arc::new(handler));
        self
    }

    pub fn greeter(mut self, greeter: GreeterFn) -> Self {
        self.greeter = Some(greeter);
        self
    }

    pub fn unknown(mut self, handler: impl Handler + 'static) -> Self {
        self.unknown = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
            greeter: self.greeter.unwrap_or(handlers::handshake::greet),
            unknown: self
                .unknown
                .unwrap_or_else(|| Arc::new(FnHandler(handlers::unknown::handle))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_session: &mut Session, _command: Command) -> BoxFuture<'_, Result<(), Error>> {
        Box::pin(async { Ok(()) })
    }

    #[test]
    fn find_ignores_case() {
        let registry = Registry::builder().command("show", noop).build();

        assert!(registry.find("SHOW").is_some());
        assert!(registry.find("Show").is_some());
        assert!(registry.find("DEFINE").is_none());
    }

    #[test]
    fn verbs_are_stored_upper_cased() {
        let registry = Registry::builder()
            .command("STATUS", noop)
            .command("status", noop)
            .build();

        assert_eq!(registry.handlers.len(), 1);
        assert!(registry.find("STATUS").is_some());
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::builder().build();

        assert!(registry.handlers.is_empty());
        assert!(registry.find("QUIT").is_none());
    }
}
