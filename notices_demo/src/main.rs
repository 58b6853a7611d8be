//! CLI entrypoint for `notices-demo`.

use clap::Parser;
use notices_demo::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    notices_demo::run(&args, &mut stdout).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
