#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::sync::Arc;

use contact_form_relay::{
    completion::{CompletionSink, TracingCompletionSink},
    config::Config,
    email::SesEmailSender,
    ContactFormRelay, ProxyRequest, ProxyResponse,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

async fn function_handler(
    relay: &ContactFormRelay,
    sink: &dyn CompletionSink,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "invocation started");
    Ok(relay.invoke(&event.payload, sink).await?)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load and validate configuration first (fail-fast)
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    // CloudWatch adds its own timestamps and does not render ANSI colours
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_ansi(false)
        .without_time()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        recipient = %config.email.recipient,
        "contact-form-relay starting up"
    );

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sender = Arc::new(SesEmailSender::new(aws_sdk_ses::Client::new(&sdk_config)));
    let relay = Arc::new(ContactFormRelay::new(config.email, sender));
    let sink: Arc<dyn CompletionSink> = Arc::new(TracingCompletionSink);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let relay = Arc::clone(&relay);
        let sink = Arc::clone(&sink);
        async move { function_handler(&relay, sink.as_ref(), event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}
