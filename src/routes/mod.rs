mod contact;
mod healthcheck;

pub use contact::{contact, ContactResponse};
pub use healthcheck::{healthcheck, ChecksObject, DeliveryChecks, HealthcheckObject};
