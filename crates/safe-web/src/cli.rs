use std::path::PathBuf;

use clap::Parser;
use safe_config::SafeConfig;

/// Command-line flags for the `iamsafe` binary.
///
/// Every flag except `--config`, `-q` and `-v` overrides the matching
/// configuration value.
#[derive(Debug, Parser)]
#[command(name = "iamsafe", version, about = "I Am Safe - emergency status board")]
pub struct Cli {
    /// Config file to load instead of ./iamsafe.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface address to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database file path
    #[arg(long)]
    pub db: Option<String>,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply(&self, config: &mut SafeConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind.clone_from(bind);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = &self.db {
            config.database.path.clone_from(db);
        }
    }

    /// Default log level when `IAMSAFE_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
