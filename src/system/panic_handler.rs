//! Panic handler module
//!
//! Every panic is appended to `crash.log`. The panel (TUI mode) restores
//! the terminal and prints one line; one-shot commands such as
//! `generate-config` (console mode) print the location and backtrace.

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One-shot command writing to a normal terminal
    Console,
    /// The panel owns the terminal in raw mode
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let message = panic_message(panic_info.payload());

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        // Write to crash.log
        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        match mode {
            RunMode::Console => display_detailed_panic(&message, &location, &backtrace),
            RunMode::Tui => display_simple_panic(&message),
        }
    }));
}

/// Text of a panic payload
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Leave raw mode and the alternate screen so the message is readable
#[cfg(feature = "tui")]
fn restore_terminal() {
    use crossterm::{execute, terminal};

    let _ = terminal::disable_raw_mode();
    let _ = execute!(
        std::io::stderr(),
        terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

/// Console mode (one-shot commands): reason, location and backtrace
fn display_detailed_panic(message: &str, location: &str, backtrace: &std::backtrace::Backtrace) {
    use colored::Colorize;

    eprintln!(
        "{} reboot-terminal panicked at {}",
        "[PANIC]".red().bold(),
        location.yellow()
    );
    eprintln!("  {}", message.white());
    eprintln!("{}", format!("{}", backtrace).dimmed());
    eprintln!("{}", "Crash report appended to crash.log".cyan());
}

/// TUI mode: Display simple error message
fn display_simple_panic(message: &str) {
    eprintln!();
    eprintln!("Program panicked: {}", message);
    eprintln!("Details saved to crash.log, please check the log file");
    eprintln!();
}

/// Write crash log
fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
