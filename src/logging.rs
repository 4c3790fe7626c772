//! Log setup: `timestamp - logger name - level - message` lines on stdout.

use std::io::Write;

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,homework_bot=debug";

/// Initializes the global logger. Safe to call more than once.
pub fn init() {
    let _ = Builder::from_env(Env::new().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(
                    Local::now(),
                    record.target(),
                    record.level(),
                    record.args()
                )
            )
        })
        .try_init();
}

fn format_line(
    at: DateTime<Local>,
    target: &str,
    level: log::Level,
    message: &std::fmt::Arguments<'_>,
) -> String {
    format!(
        "{} - {} - {} - {}",
        at.format("%Y-%m-%d %H:%M:%S,%3f"),
        target,
        level,
        message
    )
}
