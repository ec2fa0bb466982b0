use super::SiteArgs;
use anyhow::{Context, Result};
use florastack_api::{AppState, router};
use std::net::SocketAddr;

/// Serve the placeholder API endpoints for local development.
///
/// Uses the assistant settings from the site configuration so answers match
/// what the generated route handlers return.
pub async fn run(site: SiteArgs, port: u16) -> Result<()> {
    let config = site.load_config()?;

    println!("Starting placeholder API...");
    println!("   Assistant: {}", config.assistant.name);

    let app = router(AppState::placeholder(&config.assistant));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    println!("\nListening on http://localhost:{}", port);
    println!("   POST /api/ai");
    println!("   GET  /api/health");
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
