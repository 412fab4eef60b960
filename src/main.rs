use anyhow::{Context, Result};
use portfolio_contact::{
    configuration::get_configuration,
    startup::build,
    telemetry::{get_subscriber, init_subscriber},
};

#[actix_web::main]
async fn main() -> Result<()> {
    let config_file: &str = "configuration";
    let configuration = get_configuration(config_file).with_context(|| {
        format!("Failed to read configuration file \"{}\"", config_file)
    })?;
    let subscriber = get_subscriber(
        env!("CARGO_PKG_NAME"),
        &configuration.application.log_level,
        std::io::stdout,
    );
    init_subscriber(subscriber)?;
    let (server, port) = build(&configuration).with_context(|| {
        format!(
            "Failed to bind {}:{}",
            configuration.application.host, configuration.application.port
        )
    })?;
    tracing::info!("Listening on {}:{}", configuration.application.host, port);
    server.await.context("Server terminated unexpectedly")
}
