use crate::configuration::DeliveryCredentials;
use crate::contact::FormDraft;
use crate::delivery::DeliveryClient;
use crate::submission::{ContactForm, SubmissionOutcome};
use actix_web::{web, HttpResponse, HttpResponseBuilder};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ContactResponse {
    pub outcome: String,
    pub status: String,
    pub detail: Option<String>,
    pub draft: FormDraft,
}

fn response_for(outcome: &SubmissionOutcome) -> HttpResponseBuilder {
    if !outcome.is_terminal() {
        tracing::error!("Submission ended without a terminal outcome: {:?}", outcome);
        return HttpResponse::InternalServerError();
    }
    match outcome {
        SubmissionOutcome::Delivered => HttpResponse::Ok(),
        SubmissionOutcome::ValidationRejected { .. } => HttpResponse::BadRequest(),
        SubmissionOutcome::DeliveryFailed { .. } => HttpResponse::BadGateway(),
        SubmissionOutcome::NotConfigured { .. } => HttpResponse::ServiceUnavailable(),
        SubmissionOutcome::Idle | SubmissionOutcome::Pending => HttpResponse::InternalServerError(),
    }
}

#[cfg(test)]
mod tests {
    use super::response_for;
    use crate::submission::SubmissionOutcome;

    #[test]
    fn only_terminal_outcomes_map_to_client_facing_statuses() {
        assert_eq!(500, response_for(&SubmissionOutcome::Pending).finish().status().as_u16());
        assert_eq!(500, response_for(&SubmissionOutcome::Idle).finish().status().as_u16());
        assert_eq!(200, response_for(&SubmissionOutcome::Delivered).finish().status().as_u16());
        let not_configured = SubmissionOutcome::not_configured(&["EMAILJS_SERVICE_ID"]);
        assert_eq!(503, response_for(&not_configured).finish().status().as_u16());
    }
}

#[tracing::instrument(
    name = "Handling contact form submission",
    skip(form, credentials, client)
)]
pub async fn contact(
    form: web::Form<FormDraft>,
    credentials: web::Data<DeliveryCredentials>,
    client: web::Data<dyn DeliveryClient>,
) -> HttpResponse {
    let mut contact_form = ContactForm::with_draft(form.into_inner());
    contact_form.submit(&credentials, client.get_ref()).await;
    let (draft, outcome) = contact_form.into_parts();
    response_for(&outcome).json(ContactResponse {
        outcome: outcome.kind().to_owned(),
        status: outcome.status().to_owned(),
        detail: outcome.detail().map(str::to_owned),
        draft,
    })
}
