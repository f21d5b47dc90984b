use std::io::Write;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use uthoctl::cli::{execute_command, output, usage_exit_code, Cli, CliError, CliResult};
use uthoctl::config::ConfigStore;
use uthoctl::exitcode;
use uthoctl::infrastructure::di::ServiceContainer;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        match e {
            // the prompt already sits on stdout; finish that line
            CliError::Aborted => println!("{}", e),
            _ => output::error(&e),
        }
        std::process::exit(e.exit_code());
    }
    std::process::exit(exitcode::OK);
}

fn run(cli: Cli) -> CliResult<()> {
    let store = match &cli.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::default_location()?,
    };
    let mut settings = store.load_or_env()?;
    if let Some(api_url) = &cli.api_url {
        settings.api_url = api_url.clone();
    }
    let ctx = ServiceContainer::new(settings, store);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli, &ctx, &mut out)?;
    out.flush()
        .map_err(|e| uthoctl::infrastructure::InfraError::io("flush stdout", e))?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr so tables on stdout stay clean
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
