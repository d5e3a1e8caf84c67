mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ddnsly_config::seed_registry;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands operate on the file itself, no roster needed
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "ddnsly", &mut std::io::stdout());
            Ok(())
        }

        // Everything else works against the seeded roster
        cmd => {
            let path = commands::config_cmd::resolve_path(&cli.global);
            let cfg = ddnsly_config::load_config_at(&path)?;
            let registry = seed_registry(&cfg);

            tracing::debug!(command = ?cmd, clients = registry.len(), "dispatching command");
            match cmd {
                Command::Clients(args) => commands::clients::handle(&registry, args, &cli.global),
                Command::Open(args) => commands::open_cmd::handle(&registry, args, &cli.global),
                Command::Stats => commands::stats::handle(&registry, &cli.global),
                Command::Config(_) | Command::Completions(_) => Ok(()),
            }
        }
    }
}
