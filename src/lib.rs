pub mod censoredstring;
pub mod configuration;
pub mod contact;
pub mod delivery;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod telemetry;
