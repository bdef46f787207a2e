use anyhow::Result;
use clap::Parser;
use std::io;
use tasker::commands::Repl;
use tasker::libs::messages::macros::is_debug_mode;
use tasker::libs::service::TaskService;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // With TASKER_DEBUG or RUST_LOG set, user-facing messages are routed
    // through tracing instead of plain stdout.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    let stdin = io::stdin();
    let mut repl = Repl::new(TaskService::new(), stdin.lock());
    repl.run()
}
