mod emailjs;
#[cfg(test)]
pub(crate) mod stub;

pub use emailjs::EmailJsClient;

use crate::censoredstring::CensoredString;
use crate::contact::ValidatedDraft;
use futures::future::BoxFuture;
use std::fmt;

/// Template variables the EmailJS template is expected to reference.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub contact_info: String,
    pub subject: String,
    pub message: String,
}

impl From<ValidatedDraft<'_>> for TemplateParams {
    fn from(valid: ValidatedDraft<'_>) -> Self {
        let draft = valid.draft();
        Self {
            from_name: draft.name.clone(),
            contact_info: draft.contact.clone(),
            subject: draft.subject.clone(),
            message: draft.message.clone(),
        }
    }
}

/// One fully-configured send: credentials plus template variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: CensoredString,
    pub template_params: TemplateParams,
}

/// Whatever diagnostics the delivery backend surfaced on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryError {
    pub text: Option<String>,
    pub message: Option<String>,
    pub status: Option<u16>,
}

impl DeliveryError {
    pub fn from_status(status: u16, text: &str) -> Self {
        let text = text.trim();
        Self {
            text: (!text.is_empty()).then(|| text.to_owned()),
            message: None,
            status: Some(status),
        }
    }

    pub fn from_message<T: ToString>(message: T) -> Self {
        Self {
            text: None,
            message: Some(message.to_string()),
            status: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = non_empty(&self.text)
            .or_else(|| non_empty(&self.message))
            .unwrap_or("Unknown error");
        f.write_str(description)?;
        // A zero status carries no information
        if let Some(status) = self.status.filter(|status| *status != 0) {
            write!(f, " (status {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for DeliveryError {}

/// Capability to hand a message to the transactional-email backend.
pub trait DeliveryClient: Send + Sync {
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'_, Result<(), DeliveryError>>;
}

impl<T: DeliveryClient + ?Sized> DeliveryClient for std::sync::Arc<T> {
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'_, Result<(), DeliveryError>> {
        (**self).send(request)
    }
}
