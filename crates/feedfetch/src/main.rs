//! feedfetch: fetch a user's profile, posts, and comments.

use anyhow::Result;
use feedfetch_lib::{app, config, errors};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    if let Err(err) = runtime.block_on(app::run(&config)) {
        eprintln!("Error: {err}");
        std::process::exit(errors::exit_code(&err));
    }
    Ok(())
}
