use crate::delivery::DeliveryError;

pub const TEMPLATE_VARIABLES_HINT: &str =
    "Tip: In your EmailJS template, use variables: from_name, contact_info, subject, message.";
pub const DELIVERY_FAILURE_REMEDIATION: &str =
    "If this persists, verify service/template/public key and template variables match.";

/// Status of one submission attempt, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    ValidationRejected { reason: String },
    NotConfigured { reason: String, hint: String },
    Pending,
    Delivered,
    DeliveryFailed { reason: String },
}

impl SubmissionOutcome {
    pub fn not_configured(missing: &[&str]) -> Self {
        SubmissionOutcome::NotConfigured {
            reason: format!(
                "Email service not configured. Add {} to the environment and restart the service.",
                missing.join(", ")
            ),
            hint: TEMPLATE_VARIABLES_HINT.to_owned(),
        }
    }

    pub fn delivery_failed(error: &DeliveryError) -> Self {
        SubmissionOutcome::DeliveryFailed {
            reason: format!("Reason: {}. {}", error, DELIVERY_FAILURE_REMEDIATION),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Idle => "idle",
            SubmissionOutcome::ValidationRejected { .. } => "validation_rejected",
            SubmissionOutcome::NotConfigured { .. } => "not_configured",
            SubmissionOutcome::Pending => "pending",
            SubmissionOutcome::Delivered => "delivered",
            SubmissionOutcome::DeliveryFailed { .. } => "delivery_failed",
        }
    }

    /// Headline status line; empty while idle.
    pub fn status(&self) -> &str {
        match self {
            SubmissionOutcome::Idle => "",
            SubmissionOutcome::ValidationRejected { reason } => reason,
            SubmissionOutcome::NotConfigured { reason, .. } => reason,
            SubmissionOutcome::Pending => "Sending...",
            SubmissionOutcome::Delivered => "Message sent successfully!",
            SubmissionOutcome::DeliveryFailed { .. } => "Failed to send.",
        }
    }

    /// Secondary diagnostic line, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::NotConfigured { hint, .. } => Some(hint),
            SubmissionOutcome::DeliveryFailed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionOutcome::Idle | SubmissionOutcome::Pending)
    }
}
