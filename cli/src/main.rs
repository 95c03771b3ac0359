mod config;
mod shell;
mod transport;

use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use todo_core::{TodoClient, TodoListController};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::CliArgs;
use transport::UreqTransport;

fn init_logging(args: &CliArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    init_logging(&args);
    info!(base_url = %args.base_url, lang = %args.lang, "starting todo client");

    let mut controller =
        TodoListController::new(TodoClient::new(&args.base_url)).with_locale(args.lang);
    let transport = UreqTransport::new();

    shell::run(&mut controller, &transport, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
