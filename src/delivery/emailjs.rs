use crate::delivery::{DeliveryClient, DeliveryError, DeliveryRequest, TemplateParams};
use futures::future::BoxFuture;
use futures::FutureExt;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(serde::Serialize)]
struct SendEmailBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http_client: reqwest::Client,
    send_url: String,
}

impl EmailJsClient {
    pub fn new(api_base_url: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_base_url)
    }

    pub fn with_http_client(http_client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http_client,
            send_url: format!("{}{}", api_base_url.trim_end_matches('/'), SEND_PATH),
        }
    }

    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    #[tracing::instrument(
        name = "Sending email through EmailJS",
        skip(self, request),
        fields(service_id = %request.service_id, template_id = %request.template_id)
    )]
    async fn send_email(&self, request: DeliveryRequest) -> Result<(), DeliveryError> {
        let body = SendEmailBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: request.public_key.expose(),
            template_params: &request.template_params,
        };
        let response = self
            .http_client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                tracing::error!("EmailJS request to {} failed: {}", self.send_url, error);
                DeliveryError::from_message(error)
            })?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // Error bodies are short plain-text diagnostics such as
        // "The template ID is invalid."
        let text = response.text().await.unwrap_or_default();
        tracing::error!("EmailJS rejected the message with status {}: {}", status, text);
        Err(DeliveryError::from_status(status.as_u16(), &text))
    }
}

impl DeliveryClient for EmailJsClient {
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'_, Result<(), DeliveryError>> {
        self.send_email(request).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::EmailJsClient;

    #[test]
    fn send_url_joins_base_and_path() {
        assert_eq!(
            "https://api.emailjs.com/api/v1.0/email/send",
            EmailJsClient::new("https://api.emailjs.com/").send_url()
        );
        assert_eq!(
            "http://127.0.0.1:9000/api/v1.0/email/send",
            EmailJsClient::new("http://127.0.0.1:9000").send_url()
        );
    }
}
