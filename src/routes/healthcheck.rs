use crate::configuration::DeliveryCredentials;
use actix_web::{web, HttpResponse};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

// Healthcheck response format for HTTP APIs https://inadarei.github.io/rfc-healthcheck/
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthcheckObject {
    pub status: String,
    pub checks: ChecksObject,
    pub output: String,
    pub time: String,
    pub version: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ChecksObject {
    pub delivery: DeliveryChecks,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct DeliveryChecks {
    pub status: String,
    pub output: String,
}

fn delivery_checks(credentials: &DeliveryCredentials) -> DeliveryChecks {
    let missing = credentials.missing();
    if missing.is_empty() {
        DeliveryChecks {
            status: "pass".to_owned(),
            output: String::new(),
        }
    } else {
        DeliveryChecks {
            status: "warn".to_owned(),
            output: format!("Missing {}", missing.join(", ")),
        }
    }
}

pub async fn healthcheck(credentials: web::Data<DeliveryCredentials>) -> HttpResponse {
    let time = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|error| {
        tracing::error!("Failed to format healthcheck time: {}", error);
        String::new()
    });
    let delivery = delivery_checks(&credentials);
    HttpResponse::Ok().json(HealthcheckObject {
        status: delivery.status.clone(),
        checks: ChecksObject { delivery },
        output: String::new(),
        time,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
