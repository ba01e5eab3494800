use clap::Parser;

use crate::codec::DEFAULT_MAX_LINE_LENGTH;

/// Default dict port, see RFC 2229 section 3.
pub const PORT: u16 = 2628;

#[derive(Parser, Debug, Clone)]
#[command(name = "rustdict", about = "A dict protocol server")]
pub struct Config {
    /// The address to listen on
    #[arg(long, env = "RUSTDICT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on
    #[arg(short, long, env = "RUSTDICT_PORT", default_value_t = PORT)]
    pub port: u16,

    /// Server name, shown in the greeting and used in message ids
    #[arg(short, long, env = "RUSTDICT_NAME", default_value = "rustdict")]
    pub name: String,

    /// Longest request line accepted, in bytes. Longer lines end the session
    #[arg(long, env = "RUSTDICT_MAX_LINE_LENGTH", default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    pub max_line_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["rustdict"]).unwrap();

        assert_eq!(config.port, 2628);
        assert_eq!(config.max_line_length, 8192);
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "rustdict",
            "--port",
            "2629",
            "--name",
            "dict.example.org",
            "--max-line-length",
            "1024",
        ])
        .unwrap();

        assert_eq!(config.port, 2629);
        assert_eq!(config.name, "dict.example.org");
        assert_eq!(config.max_line_length, 1024);
    }
}
