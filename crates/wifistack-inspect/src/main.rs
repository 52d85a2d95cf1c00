//! wifistack-inspect binary
//!
//! Decodes a hex capture of 802.11 frames and logs each frame to stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wifistack_inspect::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let result = wifistack_inspect::run(&args);
    if let Err(e) = &result {
        error!(error = %e, "inspection failed");
    }

    ExitCode::from(wifistack_inspect::exit_code(&result))
}
