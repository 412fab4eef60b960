mod contact_method;
mod form_draft;
mod validation;

pub use contact_method::{is_email_shaped, is_numeric_string, ContactMethod};
pub use form_draft::{FormDraft, FormField};
pub use validation::{validate, Rejection, ValidatedDraft};
