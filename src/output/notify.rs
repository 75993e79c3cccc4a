//! Terminal notification sink
//!
//! Discovery results are user-facing output, not logs, so they go straight
//! to stdout with color rather than through tracing.

use colored::Colorize;

/// Prints a discovered URL with the subsystem that found it
pub fn hit(label: &str, url: &str, code: u16) {
    println!(
        "[{}]: {} => {}",
        label.bright_blue().bold(),
        url.bright_magenta().bold(),
        code.to_string().bright_yellow().bold()
    );
}

/// Prints an informational lifecycle line
pub fn info(msg: &str) {
    println!("[{}]: {}", "INFO".green().bold(), msg);
}

/// Prints an error line
pub fn error(msg: &str) {
    eprintln!("[{}]: {}", "Error".red().bold(), msg);
}
