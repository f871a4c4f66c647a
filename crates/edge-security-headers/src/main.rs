#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use edge_security_headers::{
    build_security_headers, config::Config, event::EdgeEvent, event::EdgeResponse, handle,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_ansi(false)
        .without_time()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "edge-security-headers starting up"
    );

    let headers = build_security_headers();

    lambda_runtime::run(service_fn(move |event: LambdaEvent<EdgeEvent>| {
        let headers = std::sync::Arc::clone(&headers);
        async move { Ok::<EdgeResponse, Error>(handle(&headers, event.payload)?) }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}
