use regex::Regex;
use std::sync::LazyLock;

// Browser whitespace and line terminators. Differs from Unicode White_Space:
// U+FEFF is included, U+0085 is not.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

// One '@' between two whitespace-free segments, with a '.' inside the domain.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let segment = format!("[^@{}]+", BROWSER_WHITESPACE);
    Regex::new(&format!(r"^{0}@{0}\.{0}$", segment)).expect("email shape pattern compiles")
});

// Decimal literals with optional sign and exponent, signed Infinity, and
// unsigned hex/octal/binary literals.
static NUMERIC_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
    )
    .expect("numeric string pattern compiles")
});

/// How the sender asked to be reached back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }

    /// Email shape wins; anything numeric-coercible counts as a phone number.
    pub fn classify(contact: &str) -> Option<Self> {
        if is_email_shaped(contact) {
            Some(ContactMethod::Email)
        } else if is_numeric_string(contact) {
            Some(ContactMethod::Phone)
        } else {
            None
        }
    }
}

pub fn is_email_shaped(contact: &str) -> bool {
    EMAIL_SHAPE.is_match(contact)
}

/// Whether `value` coerces to a number under the loose string-to-number
/// rules browsers apply: surrounding whitespace is ignored and a blank string
/// is zero.
pub fn is_numeric_string(value: &str) -> bool {
    let trimmed = value.trim_matches(is_coercion_whitespace);
    trimmed.is_empty() || NUMERIC_STRING.is_match(trimmed)
}

fn is_coercion_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
