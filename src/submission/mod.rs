mod contact_form;
mod controller;
mod outcome;

pub use contact_form::{ContactForm, PendingAttempt};
pub use controller::{prepare, submit};
pub use outcome::{SubmissionOutcome, DELIVERY_FAILURE_REMEDIATION, TEMPLATE_VARIABLES_HINT};
