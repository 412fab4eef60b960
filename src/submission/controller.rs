use crate::configuration::DeliveryCredentials;
use crate::contact::{validate, FormDraft};
use crate::delivery::{DeliveryClient, DeliveryRequest, TemplateParams};
use crate::submission::SubmissionOutcome;

/// Synchronous gate of a submission: validation first, then configuration.
///
/// Returns the request to dispatch, or the outcome that ends the attempt
/// without touching the network.
pub fn prepare(
    draft: &FormDraft,
    credentials: &DeliveryCredentials,
) -> Result<DeliveryRequest, SubmissionOutcome> {
    let valid = validate(draft).map_err(|rejection| {
        tracing::warn!("Contact form rejected: {}", rejection.reason());
        SubmissionOutcome::ValidationRejected {
            reason: rejection.to_string(),
        }
    })?;
    tracing::debug!("Contact form valid, reply by {}", valid.contact_method().as_str());
    match credentials {
        DeliveryCredentials {
            service_id: Some(service_id),
            template_id: Some(template_id),
            public_key: Some(public_key),
        } if credentials.is_configured() => Ok(DeliveryRequest {
            service_id: service_id.clone(),
            template_id: template_id.clone(),
            public_key: public_key.clone(),
            template_params: TemplateParams::from(valid),
        }),
        _ => {
            let missing = credentials.missing();
            tracing::warn!(
                "Email delivery is not configured, missing {}",
                missing.join(", ")
            );
            Err(SubmissionOutcome::not_configured(&missing))
        }
    }
}

/// Drive one attempt to its terminal outcome. The draft is not modified;
/// resetting it after `Delivered` is the owner's job (see `ContactForm`).
pub async fn submit<C>(
    draft: &FormDraft,
    credentials: &DeliveryCredentials,
    client: &C,
) -> SubmissionOutcome
where
    C: DeliveryClient + ?Sized,
{
    let request = match prepare(draft, credentials) {
        Ok(request) => request,
        Err(outcome) => return outcome,
    };
    match client.send(request).await {
        Ok(()) => {
            tracing::info!("Contact message delivered");
            SubmissionOutcome::Delivered
        }
        Err(error) => {
            tracing::warn!("Contact message delivery failed: {}", error);
            SubmissionOutcome::delivery_failed(&error)
        }
    }
}
