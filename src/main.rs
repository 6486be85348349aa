//! hello-remote CLI - interactive greeting and calculator

use std::io;

use clap::Parser;
use hello_remote::cli::Args;
use hello_remote::SessionRunner;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = SessionRunner::new(stdin.lock(), stdout.lock());

    match runner.run() {
        Ok(_) => {}
        Err(e) if e.is_input_error() => {
            if args.strict_exit {
                std::process::exit(e.exit_code());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
