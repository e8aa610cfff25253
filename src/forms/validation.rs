use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";
pub const CURRENT_PASSWORD: &str = "current_password";
pub const NEW_PASSWORD: &str = "new_password";

/// Current values of a form, keyed by field name. Owned by the form
/// controller and replaced wholesale on each change.
pub type FieldValues = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    WeakPassword,
    Mismatch,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "The field is required",
            FieldError::InvalidFormat => "The field must be a valid email",
            FieldError::WeakPassword => {
                "The password must contain a letter, a number and a special character"
            }
            FieldError::Mismatch => "The confirm password must match the password",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Per-field validation outcome. Absent field means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    pub fn message(&self, field: &str) -> Option<&'static str> {
        self.error(field).map(|e| e.message())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn set(&mut self, field: &'static str, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Constraint {
    Required,
    Email,
    StrongPassword,
    MatchesField(&'static str),
}

impl Constraint {
    fn error(&self) -> FieldError {
        match self {
            Constraint::Required => FieldError::Required,
            Constraint::Email => FieldError::InvalidFormat,
            Constraint::StrongPassword => FieldError::WeakPassword,
            Constraint::MatchesField(_) => FieldError::Mismatch,
        }
    }

    fn holds(&self, value: &str, values: &FieldValues) -> bool {
        match self {
            Constraint::Required => !value.is_empty(),
            Constraint::Email => email_pattern().is_match(value),
            Constraint::StrongPassword => is_strong_password(value),
            Constraint::MatchesField(other) => {
                values.get(other).map(String::as_str) == Some(value)
            }
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

// At least one letter, one digit and one special character. The regex crate
// has no lookahead, so the conjunction is spelled out as character scans.
fn is_strong_password(value: &str) -> bool {
    value.len() >= 6
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_punctuation())
}

struct FieldRules {
    field: &'static str,
    constraints: Vec<Constraint>,
}

/// Declarative validation schema: per field, an ordered constraint list
/// evaluated top-to-bottom, short-circuiting at the first failure.
/// Validation is pure and synchronous.
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn field(mut self, field: &'static str, constraints: Vec<Constraint>) -> Self {
        self.fields.push(FieldRules { field, constraints });
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|rules| rules.field)
    }

    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        let mut result = ValidationResult::default();
        for rules in &self.fields {
            result.set(rules.field, self.first_failure(rules, values));
        }
        result
    }

    pub fn validate_field(&self, field: &str, values: &FieldValues) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|rules| rules.field == field)
            .and_then(|rules| self.first_failure(rules, values))
    }

    fn first_failure(&self, rules: &FieldRules, values: &FieldValues) -> Option<FieldError> {
        let value = values.get(rules.field).map(String::as_str).unwrap_or("");
        rules
            .constraints
            .iter()
            .find(|constraint| !constraint.holds(value, values))
            .map(Constraint::error)
    }
}

/// Rules for the registration form: email format, password strength, and
/// confirm/password equality (checked only when both pass the earlier rules).
pub fn register_schema() -> Schema {
    Schema::new()
        .field(EMAIL, vec![Constraint::Required, Constraint::Email])
        .field(
            PASSWORD,
            vec![Constraint::Required, Constraint::StrongPassword],
        )
        .field(
            CONFIRM_PASSWORD,
            vec![
                Constraint::Required,
                Constraint::StrongPassword,
                Constraint::MatchesField(PASSWORD),
            ],
        )
}

pub fn change_password_schema() -> Schema {
    Schema::new()
        .field(CURRENT_PASSWORD, vec![Constraint::Required])
        .field(
            NEW_PASSWORD,
            vec![Constraint::Required, Constraint::StrongPassword],
        )
        .field(
            CONFIRM_PASSWORD,
            vec![
                Constraint::Required,
                Constraint::StrongPassword,
                Constraint::MatchesField(NEW_PASSWORD),
            ],
        )
}

pub fn login_schema() -> Schema {
    Schema::new()
        .field(EMAIL, vec![Constraint::Required, Constraint::Email])
        .field(PASSWORD, vec![Constraint::Required])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[(&'static str, &str)]) -> FieldValues {
        entries
            .iter()
            .map(|(field, value)| (*field, value.to_string()))
            .collect()
    }

    #[test]
    fn empty_email_is_required() {
        let schema = register_schema();
        let result = schema.validate(&values(&[
            (EMAIL, ""),
            (PASSWORD, "Abc123!@"),
            (CONFIRM_PASSWORD, "Abc123!@"),
        ]));
        assert_eq!(result.error(EMAIL), Some(FieldError::Required));
        assert!(result.error(PASSWORD).is_none());
    }

    #[test]
    fn malformed_email_is_invalid_format() {
        let schema = register_schema();
        for email in ["not-an-email", "a@b", "a b@c.com", "@c.com"] {
            let result = schema.validate(&values(&[(EMAIL, email)]));
            assert_eq!(
                result.error(EMAIL),
                Some(FieldError::InvalidFormat),
                "email {email:?} should be rejected"
            );
        }
        let result = schema.validate(&values(&[(EMAIL, "a@b.com")]));
        assert!(result.error(EMAIL).is_none());
    }

    #[test]
    fn password_missing_character_classes_is_weak() {
        let schema = register_schema();
        for password in ["abcdefg", "1234567", "abc1234", "abcdef!", "a1!"] {
            let result = schema.validate(&values(&[(PASSWORD, password)]));
            assert_eq!(
                result.error(PASSWORD),
                Some(FieldError::WeakPassword),
                "password {password:?} should be weak"
            );
        }
    }

    #[test]
    fn required_takes_precedence_over_format() {
        let schema = register_schema();
        let result = schema.validate(&values(&[(EMAIL, ""), (PASSWORD, "")]));
        assert_eq!(result.error(EMAIL), Some(FieldError::Required));
        assert_eq!(result.error(PASSWORD), Some(FieldError::Required));
    }

    #[test]
    fn mismatch_flags_confirm_field_only() {
        let schema = register_schema();
        let result = schema.validate(&values(&[
            (EMAIL, "a@b.com"),
            (PASSWORD, "Abc123!@"),
            (CONFIRM_PASSWORD, "Xyz987!?"),
        ]));
        assert_eq!(result.error(CONFIRM_PASSWORD), Some(FieldError::Mismatch));
        assert!(result.error(PASSWORD).is_none());
        assert!(result.error(EMAIL).is_none());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn weak_confirm_reports_weakness_before_mismatch() {
        let schema = register_schema();
        let result = schema.validate(&values(&[
            (EMAIL, "a@b.com"),
            (PASSWORD, "Abc123!@"),
            (CONFIRM_PASSWORD, "abc"),
        ]));
        assert_eq!(
            result.error(CONFIRM_PASSWORD),
            Some(FieldError::WeakPassword)
        );
    }

    #[test]
    fn valid_registration_values_pass() {
        let schema = register_schema();
        let result = schema.validate(&values(&[
            (EMAIL, "a@b.com"),
            (PASSWORD, "Abc123!@"),
            (CONFIRM_PASSWORD, "Abc123!@"),
        ]));
        assert!(result.is_ok(), "unexpected errors: {result:?}");
    }

    #[test]
    fn validation_is_deterministic() {
        let schema = register_schema();
        let input = values(&[(EMAIL, "bad"), (PASSWORD, "short"), (CONFIRM_PASSWORD, "")]);
        assert_eq!(schema.validate(&input), schema.validate(&input));
    }

    #[test]
    fn change_password_schema_matches_against_new_password() {
        let schema = change_password_schema();
        let result = schema.validate(&values(&[
            (CURRENT_PASSWORD, "Old123!@"),
            (NEW_PASSWORD, "New123!@"),
            (CONFIRM_PASSWORD, "Old123!@"),
        ]));
        assert_eq!(result.error(CONFIRM_PASSWORD), Some(FieldError::Mismatch));
        assert!(result.error(CURRENT_PASSWORD).is_none());
    }

    #[test]
    fn login_schema_does_not_enforce_strength() {
        let schema = login_schema();
        let result = schema.validate(&values(&[(EMAIL, "a@b.com"), (PASSWORD, "plain")]));
        assert!(result.is_ok());
    }
}
