use crate::core::field::{Field, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn validate(kind: FieldKind, value: &str) -> bool {
    match kind {
        // Untrimmed: surrounding whitespace makes an address invalid.
        FieldKind::Email => EMAIL_PATTERN.is_match(value),
        FieldKind::ShortText => value.trim().chars().count() >= 2,
        FieldKind::Generic => !value.trim().is_empty(),
    }
}

pub fn shows_error(kind: FieldKind, value: &str) -> bool {
    !value.trim().is_empty() && !validate(kind, value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    checked: Vec<String>,
    invalid: Vec<String>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    pub fn invalid(&self) -> &[String] {
        &self.invalid
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.iter().any(|invalid| invalid == name)
    }
}

/// Checks every required field; optional fields are skipped. All failures are
/// collected, never just the first one.
pub fn validate_form<'a>(fields: impl IntoIterator<Item = &'a Field>) -> FormReport {
    let mut report = FormReport::default();
    for field in fields.into_iter().filter(|field| field.required) {
        report.checked.push(field.name.clone());
        if !validate(field.kind, &field.value) {
            report.invalid.push(field.name.clone());
        }
    }
    report
}
