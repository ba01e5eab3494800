use clap::Parser;
use rustdict::config::Config;
use rustdict::{server, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();

    server::run(config).await
}
