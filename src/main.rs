use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use valor_attest::cli::Cli;
use valor_attest::commands;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = commands::handle_verify(&cli) {
        error!("{:#}", e);
        eprintln!("valor-attest: {:#}", e);
        std::process::exit(1);
    }
}
