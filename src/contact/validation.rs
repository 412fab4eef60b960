use crate::contact::{ContactMethod, FormDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please fill in all fields.")]
    IncompleteForm,
    #[error("Please enter a valid email or phone number.")]
    InvalidContactMethod,
}

impl Rejection {
    /// Short machine-oriented reason, used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::IncompleteForm => "missing fields",
            Rejection::InvalidContactMethod => "invalid contact",
        }
    }
}

/// Proof that a draft passed [`validate`]. Borrows the draft untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedDraft<'a> {
    draft: &'a FormDraft,
    method: ContactMethod,
}

impl<'a> ValidatedDraft<'a> {
    pub fn draft(&self) -> &'a FormDraft {
        self.draft
    }

    pub fn contact_method(&self) -> ContactMethod {
        self.method
    }
}

/// Completeness first (exact emptiness, no trimming), then the contact method.
pub fn validate(draft: &FormDraft) -> Result<ValidatedDraft<'_>, Rejection> {
    if !draft.empty_fields().is_empty() {
        return Err(Rejection::IncompleteForm);
    }
    let method = ContactMethod::classify(&draft.contact).ok_or(Rejection::InvalidContactMethod)?;
    Ok(ValidatedDraft { draft, method })
}

#[cfg(test)]
mod tests {
    use super::{validate, Rejection};
    use crate::contact::{ContactMethod, FormDraft, FormField};
    use claims::{assert_err_eq, assert_ok};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn complete_draft() -> FormDraft {
        FormDraft {
            name: Name().fake(),
            contact: SafeEmail().fake(),
            subject: Sentence(1..4).fake(),
            message: Paragraph(1..3).fake(),
        }
    }

    #[test]
    fn complete_draft_with_email_is_valid() {
        let draft = FormDraft::new("Alex", "alex@example.com", "Hi", "Hello there");
        let valid = assert_ok!(validate(&draft));
        assert_eq!(ContactMethod::Email, valid.contact_method());
        assert_eq!(&draft, valid.draft());
    }

    #[test]
    fn generated_drafts_are_valid() {
        for _ in 0..25 {
            assert_ok!(validate(&complete_draft()));
        }
    }

    #[test]
    fn any_empty_field_is_incomplete() {
        for field in FormField::ALL {
            let mut draft = complete_draft();
            draft.set_field(field, "");
            assert_err_eq!(validate(&draft), Rejection::IncompleteForm, "empty {}", field);
        }
        assert_err_eq!(validate(&FormDraft::default()), Rejection::IncompleteForm);
    }

    #[test]
    fn completeness_is_checked_before_contact_method() {
        let draft = FormDraft::new("Alex", "abc", "Hi", "");
        assert_err_eq!(validate(&draft), Rejection::IncompleteForm);
    }

    #[test]
    fn whitespace_only_fields_are_not_trimmed() {
        let draft = FormDraft::new(" ", "3.14", " ", " ");
        let valid = assert_ok!(validate(&draft));
        assert_eq!(ContactMethod::Phone, valid.contact_method());
    }

    #[test]
    fn non_numeric_non_email_contact_is_invalid() {
        let mut draft = complete_draft();
        draft.contact = "abc".to_owned();
        assert_err_eq!(validate(&draft), Rejection::InvalidContactMethod);
        assert_eq!("invalid contact", Rejection::InvalidContactMethod.reason());
    }

    #[test]
    fn validate_is_idempotent() {
        arbtest::arbtest(|u| {
            let draft: FormDraft = u.arbitrary()?;
            let snapshot = draft.clone();
            assert_eq!(validate(&draft), validate(&draft));
            assert_eq!(snapshot, draft);
            Ok(())
        });
    }
}
