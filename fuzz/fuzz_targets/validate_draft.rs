#![no_main]

use libfuzzer_sys::fuzz_target;
use portfolio_contact::contact::{is_email_shaped, validate, FormDraft, Rejection};

// Input is split on newlines into name, contact, subject and message.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut fields = text.splitn(4, '\n');
    let draft = FormDraft::new(
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    );
    let first = validate(&draft);
    assert_eq!(first, validate(&draft));
    if draft.empty_fields().is_empty() && is_email_shaped(&draft.contact) {
        assert_ne!(Err(Rejection::InvalidContactMethod), first.map(|_| ()));
    }
});
