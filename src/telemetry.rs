use anyhow::{Context, Result};
use std::sync::Once;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Compose a bunyan JSON subscriber; `RUST_LOG` wins over `default_filter`.
pub fn get_subscriber<Sink>(
    name: &str,
    default_filter: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_owned(), sink))
}

/// Register a subscriber as global default to process span data.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<()> {
    LogTracer::init().context("Failed to redirect log records to tracing")?;
    set_global_default(subscriber).with_context(|| {
        format!(
            "{}::telemetry::init_subscriber: Failed to initialize tracing subscriber",
            env!("CARGO_PKG_NAME")
        )
    })
}

static TEST_TELEMETRY: Once = Once::new();

/// Install a subscriber once per test binary. Output goes to stdout only
/// when `TEST_LOG` is set.
pub fn init_test_subscriber() {
    TEST_TELEMETRY.call_once(|| {
        let installed = if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber("test", "debug", std::io::stdout))
        } else {
            init_subscriber(get_subscriber("test", "debug", std::io::sink))
        };
        if let Err(error) = installed {
            eprintln!("{:#}", error);
        }
    });
}
