//! CLI entry point - the composition root.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use nearshot_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::from_cli(&cli)?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Locate { .. } => handlers::locate::execute(&ctx).await,
        Commands::Photos { .. } => handlers::photos::execute(&ctx).await,
        Commands::Carousel { carousel, .. } => handlers::carousel::execute(&ctx, carousel).await,
        Commands::Show {
            virtual_index,
            multiplier,
            ..
        } => handlers::show::execute(&ctx, virtual_index, multiplier).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before parsing so clap sees FLICKR_API_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
