//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Reboot Terminal - keep the simulated systems running
#[derive(Parser)]
#[command(name = "reboot-terminal")]
#[command(version)]
#[command(about = "A themed terminal reboot panel", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the reboot panel (default)
    Run,

    /// Write a sample configuration file
    GenerateConfig {
        /// Output path, `-` for stdout
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The command to run, `run` when none was given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_run() {
        let cli = Cli::parse_from(["reboot-terminal"]);
        assert_eq!(cli.command(), &Commands::Run);
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_generate_config_args() {
        let cli = Cli::parse_from([
            "reboot-terminal",
            "generate-config",
            "out/panel.toml",
            "--force",
            "-c",
            "other.toml",
        ]);
        assert_eq!(
            cli.command(),
            &Commands::GenerateConfig {
                output: "out/panel.toml".to_string(),
                force: true,
            }
        );
        assert_eq!(cli.config, "other.toml");
    }
}
