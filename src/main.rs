use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use reboot_terminal::cli::{Cli, Commands};
use reboot_terminal::config::{StaticConfig, init_config};
use reboot_terminal::errors::PanelError;
use reboot_terminal::system::{RunMode, init_logging, install_panic_hook};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command() {
        Commands::Run => run_panel(&cli.config).await,
        Commands::GenerateConfig { output, force } => {
            install_panic_hook(RunMode::Console);
            generate_config(output, *force)
        }
    };

    // 错误只在这里输出一次
    if let Err(e) = result {
        eprintln!("{}", error_report(&e));
        std::process::exit(1);
    }
}

fn error_report(error: &anyhow::Error) -> String {
    match error.downcast_ref::<PanelError>() {
        Some(panel_error) => panel_error.format_colored(),
        None => format!("{} {:#}", "[ERROR]".red().bold(), error),
    }
}

async fn run_panel(config_path: &str) -> Result<()> {
    let config = init_config(config_path)?;

    let _guard = init_logging(&config.logging)?;
    install_panic_hook(RunMode::Tui);
    info!("Reboot terminal v{} starting", env!("CARGO_PKG_VERSION"));

    run_interface().await
}

#[cfg(feature = "tui")]
async fn run_interface() -> Result<()> {
    reboot_terminal::interfaces::tui::run_tui().await?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
async fn run_interface() -> Result<()> {
    bail!("This build has no user interface; rebuild with the `tui` feature")
}

fn generate_config(output: &str, force: bool) -> Result<()> {
    if output == "-" {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    if std::path::Path::new(output).exists() && !force {
        bail!("{} already exists, pass --force to overwrite", output);
    }

    StaticConfig::default().save_to_file(output)?;

    println!("{} {}", "Sample configuration written to".green(), output.bold());
    Ok(())
}
