//! mock-answer binary.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;
use mock_answer::{router, MockConfig, COMPONENT_PATH, QUESTION_PATH};
use tracing::info;

/// Development stand-in for the sitechat question endpoint.
#[derive(Parser, Debug)]
#[command(name = "mock-answer", about = "Streams canned answers to the sitechat widget")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "MOCK_ANSWER_PORT", default_value_t = 8080)]
    port: u16,

    /// Bytes per streamed chunk.
    #[arg(long, default_value_t = 8)]
    chunk_size: usize,

    /// Pause before each chunk, in milliseconds.
    #[arg(long, default_value_t = 40)]
    delay_ms: u64,

    /// Value of the `Access-Control-Allow-Origin` header.
    #[arg(long, env = "ORIGINS", default_value = "*")]
    allow_origin: String,

    /// Refuse every question with `400`, like a site that is not indexed yet.
    #[arg(long)]
    not_ready: bool,

    /// Widget bundle directory served under `/component`.
    #[arg(long, env = "COMPONENT_DIR", default_value = "component")]
    component_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = MockConfig {
        chunk_size: args.chunk_size,
        chunk_delay: Duration::from_millis(args.delay_ms),
        allow_origin: HeaderValue::from_str(&args.allow_origin)?,
        ready: !args.not_ready,
        component_dir: args.component_dir,
    };
    info!(
        chunk_size = config.chunk_size,
        delay_ms = args.delay_ms,
        allow_origin = %args.allow_origin,
        ready = config.ready,
        component_dir = %config.component_dir.display(),
        "mock endpoint configured"
    );

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        address = %addr,
        question = QUESTION_PATH,
        bundle = COMPONENT_PATH,
        "mock-answer listening"
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}
