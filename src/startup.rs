use crate::configuration::{DeliveryCredentials, Settings};
use crate::delivery::{DeliveryClient, EmailJsClient};
use crate::routes::{contact, healthcheck};
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    credentials: DeliveryCredentials,
    delivery_client: Arc<dyn DeliveryClient>,
) -> Result<Server, std::io::Error> {
    let credentials = web::Data::new(credentials);
    let delivery_client: web::Data<dyn DeliveryClient> = web::Data::from(delivery_client);
    let server = HttpServer::new(move || {
        App::new()
            // Logging middleware
            .wrap(TracingLogger::default())
            // Ensure App to be running correctly
            .route("/healthcheck", web::get().to(healthcheck))
            // Handle contact form submissions
            .route("/contact", web::post().to(contact))
            // Credentials are read once at startup and shared read-only
            .app_data(credentials.clone())
            .app_data(delivery_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Bind the configured address and wire the EmailJS client. Returns the
/// server together with the port actually bound.
pub fn build(settings: &Settings) -> Result<(Server, u16), std::io::Error> {
    let bind_address = (settings.application.host.as_str(), settings.application.port);
    // Raises if failed to bind address
    let listener = TcpListener::bind(bind_address)?;
    let port = listener.local_addr()?.port();
    let credentials = settings.delivery.credentials.clone();
    let missing = credentials.missing();
    if missing.is_empty() {
        tracing::info!("Email delivery configured");
    } else {
        tracing::warn!(
            "Email delivery disabled, missing {}. Validation still runs.",
            missing.join(", ")
        );
    }
    let delivery_client = Arc::new(EmailJsClient::new(&settings.delivery.api_base_url));
    let server = run(listener, credentials, delivery_client)?;
    Ok((server, port))
}
