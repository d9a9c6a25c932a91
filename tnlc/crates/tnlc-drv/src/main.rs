use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tnlc_drv::Cli;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("TNLC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match tnlc_drv::run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
