pub mod codec;
pub mod command;
pub mod config;
pub mod connection;
pub mod handlers;
pub mod registry;
pub mod response;
pub mod server;
pub mod session;
pub mod token;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
