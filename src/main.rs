use anyhow::Result;
use clap::Parser;
use iphelper::cli::{Cli, Context};
use iphelper::config::Settings;
use iphelper::output::{print_error, print_info};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so expanded addresses on stdout stay pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let ctx = Context::new(settings, cli.output, cli.quiet);

    let Some(command) = cli.command else {
        if !cli.quiet {
            print_info(&format!("iphelper v{}", env!("CARGO_PKG_VERSION")));
            print_info("Use 'iphelper --help' for usage information.");
        }
        return Ok(());
    };

    command.execute(&ctx)?;
    Ok(())
}
