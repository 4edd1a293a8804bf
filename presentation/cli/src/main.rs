use dotenvy::dotenv;

mod config;
mod console;
mod setup;

use config::app_config::AppConfig;
use console::session::Session;
use setup::dependency_injection::DependencyContainer;

/// Product catalog console entry point.
///
/// Loads configuration, wires the catalog screen to the REST adapter and
/// runs the interactive session until `quit` or end of input.
/// - config/: Environment-driven settings (products API)
/// - setup/: Dependency injection
/// - console/: Command parsing, rendering and the interactive loop
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (so RUST_LOG from .env applies)
    dotenv().ok();

    // 2. Initialize tracing on stderr, keeping stdout for the console
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!("Products API at {}", config.api.base_url);

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the interactive session
    Session::new(container.screen, container.input).run().await?;

    Ok(())
}
