#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use portfolio_contact::configuration::DeliveryCredentials;
use portfolio_contact::delivery::EmailJsClient;
use portfolio_contact::telemetry::init_test_subscriber;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

const LOCAL_ADDR: &str = "127.0.0.1";

fn bind_random_port() -> (TcpListener, String) {
    let listener = TcpListener::bind((LOCAL_ADDR, 0)).expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    (listener, format!("http://{}:{}", LOCAL_ADDR, port))
}

pub fn test_credentials() -> DeliveryCredentials {
    DeliveryCredentials::new("service_test", "template_test", "pk_test")
}

struct FakeState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// In-process stand-in for the EmailJS send endpoint.
pub struct FakeEmailJs {
    pub base_url: String,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl FakeEmailJs {
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn fake_send(
    body: web::Json<serde_json::Value>,
    state: web::Data<FakeState>,
) -> HttpResponse {
    state.received.lock().unwrap().push(body.into_inner());
    HttpResponse::build(state.status).body(state.body.clone())
}

// Launch a fake EmailJS answering every send with `status` and `body`
pub fn launch_fake_emailjs(status: u16, body: &str) -> FakeEmailJs {
    let (listener, base_url) = bind_random_port();
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(FakeState {
        status: StatusCode::from_u16(status).expect("Invalid fake status code"),
        body: body.to_owned(),
        received: received.clone(),
    });
    let server = HttpServer::new(move || {
        App::new()
            .route("/api/v1.0/email/send", web::post().to(fake_send))
            .app_data(state.clone())
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen on address")
    .run();
    let _ = tokio::spawn(server);
    FakeEmailJs { base_url, received }
}

// Launch an instance for our HTTP server in the background
pub fn launch_http_server(credentials: DeliveryCredentials, api_base_url: &str) -> String {
    init_test_subscriber();
    let (listener, address) = bind_random_port();
    let delivery_client = Arc::new(EmailJsClient::new(api_base_url));
    let server = portfolio_contact::startup::run(listener, credentials, delivery_client)
        .expect("Failed to listen on address");
    let _ = tokio::spawn(server);
    address
}
