use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use ring_analyzer::analysis::handlers::{handle_analyze, handle_health};
use ring_analyzer::analysis::protocol::{ENDPOINT_ANALYZE, ENDPOINT_HEALTH};
use ring_analyzer::config::AnalyzerConfig;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> [--threshold <0-100>] [--prefix <id prefix>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:7000", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:7000 --threshold 70 --prefix ingester",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut config = AnalyzerConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--bind", Some(value)) => {
                bind_addr = Some(value.parse()?);
                i += 2;
            }
            ("--threshold", Some(value)) => {
                config = config.with_threshold(value.parse()?)?;
                i += 2;
            }
            ("--prefix", Some(value)) => {
                config.identifier_prefix = value.clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.ok_or_else(|| anyhow::anyhow!("--bind is required"))?;

    // Fail at startup rather than on the first request.
    config.validate()?;
    config.zone_parser()?;

    tracing::info!(
        "Outlier threshold: {}, identifier prefix: {:?}",
        config.outlier_threshold,
        config.identifier_prefix
    );

    let app = Router::new()
        .route(ENDPOINT_ANALYZE, post(handle_analyze))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(Arc::new(config)));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
