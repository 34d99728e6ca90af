//! rvdasm CLI - RISC-V disassembler

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};
use rvdasm::Session;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "rvdasm=debug"
    } else {
        "rvdasm=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .init();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let data = match std::fs::read(&cli.input) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("cannot read {}: {e}", cli.input.display());
            return EXIT_FAILURE;
        }
    };

    let mut session = match Session::new(&data, &cli.options) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{}: {e}", cli.input.display());
            return EXIT_FAILURE;
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = session.list_to(&mut stdout.lock()) {
        tracing::error!("{e}");
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}
