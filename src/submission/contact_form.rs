use crate::configuration::DeliveryCredentials;
use crate::contact::{FormDraft, FormField};
use crate::delivery::{DeliveryClient, DeliveryError, DeliveryRequest};
use crate::submission::{prepare, SubmissionOutcome};
use uuid::Uuid;

/// An attempt that passed the gate and awaits its delivery result.
#[derive(Debug)]
pub struct PendingAttempt {
    pub token: Uuid,
    pub request: DeliveryRequest,
}

/// One contact form instance: the live draft, the latest outcome, and the
/// token of the only attempt whose completion is still accepted.
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: FormDraft,
    outcome: SubmissionOutcome,
    in_flight: Option<Uuid>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: FormDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn into_parts(self) -> (FormDraft, SubmissionOutcome) {
        (self.draft, self.outcome)
    }

    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Run the synchronous gate. A fresh attempt always supersedes an
    /// earlier one still in flight.
    pub fn begin_submit(
        &mut self,
        credentials: &DeliveryCredentials,
    ) -> Result<PendingAttempt, SubmissionOutcome> {
        match prepare(&self.draft, credentials) {
            Ok(request) => {
                let token = Uuid::now_v7();
                if let Some(previous) = self.in_flight.replace(token) {
                    tracing::debug!("Attempt {} superseded by {}", previous, token);
                }
                self.outcome = SubmissionOutcome::Pending;
                tracing::info!(attempt = %token, "Dispatching contact message");
                Ok(PendingAttempt { token, request })
            }
            Err(outcome) => {
                self.in_flight = None;
                self.outcome = outcome.clone();
                Err(outcome)
            }
        }
    }

    /// Apply a delivery result. Returns `false` and changes nothing when
    /// `token` is not the latest attempt.
    pub fn complete(&mut self, token: Uuid, result: Result<(), DeliveryError>) -> bool {
        if self.in_flight != Some(token) {
            tracing::debug!(attempt = %token, "Discarding stale delivery result");
            return false;
        }
        self.in_flight = None;
        self.outcome = match result {
            Ok(()) => {
                tracing::info!(attempt = %token, "Contact message delivered");
                self.draft.reset();
                SubmissionOutcome::Delivered
            }
            Err(error) => {
                tracing::warn!(attempt = %token, "Contact message delivery failed: {}", error);
                SubmissionOutcome::delivery_failed(&error)
            }
        };
        true
    }

    pub async fn submit<C>(
        &mut self,
        credentials: &DeliveryCredentials,
        client: &C,
    ) -> &SubmissionOutcome
    where
        C: DeliveryClient + ?Sized,
    {
        if let Ok(PendingAttempt { token, request }) = self.begin_submit(credentials) {
            let result = client.send(request).await;
            self.complete(token, result);
        }
        &self.outcome
    }
}
