mod error;
mod history;
mod menu;
mod operation;
mod parser;
mod repl;
mod session;
mod util;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the calculator dialogue, diagnostics stay on stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    repl::start_repl()
}
