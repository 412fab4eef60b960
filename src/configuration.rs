use crate::censoredstring::CensoredString;
use config::{Config, ConfigError, Environment, File};
use serde_aux::field_attributes::deserialize_number_from_string;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const DEFAULT_API_BASE_URL: &str = "https://api.emailjs.com";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub delivery: DeliverySettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub log_level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct DeliverySettings {
    pub api_base_url: String,
    #[serde(default)]
    pub credentials: DeliveryCredentials,
}

/// Service identifier, template identifier and public key of the EmailJS
/// account. Read once at startup and never mutated afterwards.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryCredentials {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<CensoredString>,
}

impl DeliveryCredentials {
    pub fn new(service_id: &str, template_id: &str, public_key: &str) -> Self {
        Self {
            service_id: Some(service_id.to_owned()),
            template_id: Some(template_id.to_owned()),
            public_key: Some(CensoredString::new(public_key)),
        }
    }

    /// Environment variable names of every credential that is absent or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.as_deref().map_or(true, str::is_empty) {
            missing.push(SERVICE_ID_VAR);
        }
        if self.template_id.as_deref().map_or(true, str::is_empty) {
            missing.push(TEMPLATE_ID_VAR);
        }
        if self.public_key.as_ref().map_or(true, CensoredString::is_empty) {
            missing.push(PUBLIC_KEY_VAR);
        }
        missing
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

// Read optional configuration file with compatible extension YAML,JSON...
// then environment overrides, then the EmailJS credentials.
pub fn get_configuration(filename: &str) -> Result<Settings, ConfigError> {
    get_configuration_with(filename, |key| std::env::var(key).ok())
}

/// Same as [`get_configuration`] with the credential variables resolved through
/// `lookup` instead of the process environment.
pub fn get_configuration_with<F>(filename: &str, lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let credential = |key: &str| lookup(key).filter(|value| !value.is_empty());
    Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000_i64)?
        .set_default("application.log_level", "info")?
        .set_default("delivery.api_base_url", DEFAULT_API_BASE_URL)?
        .add_source(File::with_name(filename).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("delivery.credentials.service_id", credential(SERVICE_ID_VAR))?
        .set_override_option("delivery.credentials.template_id", credential(TEMPLATE_ID_VAR))?
        .set_override_option("delivery.credentials.public_key", credential(PUBLIC_KEY_VAR))?
        .build()?
        .try_deserialize()
}
