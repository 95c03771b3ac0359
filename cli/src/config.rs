use clap::{Parser, ValueEnum};
use todo_core::{Locale, DEFAULT_BASE_URL};

/// Log verbosity, used when `RUST_LOG` is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Interactive terminal client for a todo API", long_about = None)]
pub struct CliArgs {
    /// Collection URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Language of user-facing messages (`en` or `ja`).
    #[arg(long, env = "TODO_LANG", default_value_t = Locale::English)]
    pub lang: Locale,

    /// Log verbosity level. Logs go to stderr; `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}
