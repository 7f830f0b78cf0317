use std::fmt;
use std::io;

use console::ConsoleFrontend;
use services::Frontend;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trainer_core::model::OperationCatalog;
use ui::DesktopFrontend;

mod config;
mod interface;

use config::{LOG_FILTER_ENV, settings_from_env};
use interface::{Interface, prompt_interface};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  operation-trainer");
    eprintln!();
    eprintln!("Pick an interface at the prompt, then a test from the main menu.");
    eprintln!("Type EXIT at any console prompt to quit.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAINER_MAX_QUESTIONS  questions per test (default 10)");
    eprintln!("  TRAINER_LOG            log filter, e.g. debug (default warn)");
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so console prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::args().nth(1).as_deref() {
        None => {}
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(other) => {
            let err = ArgsError::UnknownArg(other.to_string());
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    }

    init_tracing();
    let settings = settings_from_env();
    let catalog = OperationCatalog::standard();

    let Some(interface) = prompt_interface(&mut io::stdin().lock(), &mut io::stdout())? else {
        info!("no interface chosen");
        return Ok(());
    };
    info!(?interface, max_questions = settings.max_questions(), "starting");

    match interface {
        Interface::Console => ConsoleFrontend::stdio().launch(catalog, settings)?,
        Interface::Graphical => DesktopFrontend::new().launch(catalog, settings)?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
