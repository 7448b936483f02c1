pub mod chat;
pub mod config;
pub mod run;

use clap::{Parser, Subcommand};

/// Travel assistant: multilingual chat with lead capture.
#[derive(Debug, Parser)]
#[command(name = "travel-assistant", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Interactive chat in the terminal.
    Chat {
        /// Resume an existing session id.
        #[arg(long)]
        session: Option<String>,
        /// Language code (en, de, uk, ru, ro).
        #[arg(long)]
        lang: Option<String>,
    },
    /// Send a single message and print the reply.
    Run {
        /// The message to send.
        message: String,
        /// Session id to continue; a new one is created when omitted.
        #[arg(long)]
        session: Option<String>,
        /// Language code (en, de, uk, ru, ro).
        #[arg(long)]
        lang: Option<String>,
        /// Print the full outcome as JSON instead of the reply text.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from `TA_CONFIG` (default `config.toml`). A
/// missing file yields the defaults. Returns the config and the path used.
pub fn load_config() -> anyhow::Result<(ta_domain::config::Config, String)> {
    let config_path = std::env::var("TA_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        ta_domain::config::Config::default()
    };

    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_flags() {
        let cli = Cli::parse_from(["travel-assistant", "run", "Bali?", "--lang", "de", "--json"]);
        match cli.command {
            Some(Command::Run { message, lang, json, session }) => {
                assert_eq!(message, "Bali?");
                assert_eq!(lang.as_deref(), Some("de"));
                assert!(json);
                assert!(session.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["travel-assistant"]);
        assert!(cli.command.is_none());
    }
}
