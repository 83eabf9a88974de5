use std::sync::Arc;

use question_gen::config::ServiceConfig;
use question_gen::questions::{AppState, Catalog, question_routes};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env()?;

    eprintln!("📋 Question Gen v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   API: POST http://0.0.0.0:{}/generate-questions",
        config.port
    );
    eprintln!("   Health: GET http://0.0.0.0:{}/health\n", config.port);

    // The catalog is built once and shared read-only across all requests.
    let catalog = Arc::new(Catalog::standard());

    let app = question_routes(AppState { catalog }).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Question server started");
    axum::serve(listener, app).await?;

    Ok(())
}
