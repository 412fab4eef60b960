use std::fmt;
use std::str::FromStr;

/// In-progress contact form input. Fields may be empty while the user is
/// still typing; emptiness is only rejected when a submission is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(test, derive(arbitrary::Arbitrary))]
#[serde(default)]
pub struct FormDraft {
    pub name: String,
    /// Either an email address or a phone number.
    pub contact: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Contact,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Contact,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Contact => "contact",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown contact form field '{}'.", s))
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormDraft {
    pub fn new(name: &str, contact: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_owned(),
            contact: contact.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Contact => &self.contact,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Contact => &mut self.contact,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fields left empty, in form order.
    pub fn empty_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{FormDraft, FormField};
    use claims::{assert_err, assert_ok_eq};
    use std::str::FromStr;

    #[test]
    fn field_names_parse_back() {
        for field in FormField::ALL {
            assert_ok_eq!(FormField::from_str(field.as_str()), field);
        }
        assert_err!(FormField::from_str("email"));
        assert_err!(FormField::from_str("Name"));
    }

    #[test]
    fn set_field_only_touches_one_field() {
        let mut draft = FormDraft::default();
        draft.set_field(FormField::Subject, "Hi");
        assert_eq!(FormDraft::new("", "", "Hi", ""), draft);
        assert_eq!(
            vec![FormField::Name, FormField::Contact, FormField::Message],
            draft.empty_fields()
        );
    }

    #[test]
    fn reset_empties_every_field() {
        let mut draft = FormDraft::new("Alex", "alex@example.com", "Hi", "Hello there");
        draft.reset();
        assert_eq!(FormDraft::new("", "", "", ""), draft);
    }

    #[test]
    fn missing_form_fields_deserialize_as_empty() {
        let draft: FormDraft = serde_urlencoded::from_str("name=Alex&subject=Hi").unwrap();
        assert_eq!(FormDraft::new("Alex", "", "Hi", ""), draft);
    }
}
