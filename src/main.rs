//! Countdown Display - A countdown timer wired to a display and a start button
//! 
//! This is the main entry point for the countdown-display application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_display::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::display_mirror_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_display={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-display server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s, granularity={}ms",
          config.host, config.port, config.duration, config.granularity_ms);

    // Create application state, which loads the page
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.duration,
        config.granularity(),
    ));

    // Mirror the display element to the terminal
    if !config.quiet_terminal {
        let display = state.display().clone();
        tokio::spawn(async move {
            display_mirror_task(display).await;
        });
    }

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /       - Countdown page");
    info!("  POST /       - Start button (page form)");
    info!("  POST /start  - Start the countdown");
    info!("  GET  /time   - Current display");
    info!("  GET  /status - Timer and server status");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
