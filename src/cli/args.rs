//! CLI argument parsing

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hello-remote")]
#[command(author, version, about = "Greet the user and do one bit of arithmetic", long_about = None)]
pub struct Args {
    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with a distinct non-zero code when the session is aborted
    /// (2 invalid number, 3 division by zero, 4 invalid operation)
    #[arg(long)]
    pub strict_exit: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
