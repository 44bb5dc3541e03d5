use std::process::ExitCode;

use clap::Parser;

use gitpeek::cli::{run, Cli};
use gitpeek::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    run(Cli::parse()).await
}
