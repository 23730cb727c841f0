use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ContactMessages;

// U+FEFF counts as whitespace in browsers but not in `char::is_whitespace`
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("valid email pattern")
});

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Required contact form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

/// Raw values of the form at submit time. A field missing from the page is
/// submitted as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks every field and returns one error per failing field, in field
/// order. An empty result means the submission is accepted.
pub fn validate(submission: &Submission, messages: &ContactMessages) -> Vec<FieldError> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            let value = submission.value(field);
            let message = if is_blank(value) {
                match field {
                    Field::Name => &messages.name_missing,
                    Field::Email => &messages.email_missing,
                    Field::Subject => &messages.subject_missing,
                    Field::Message => &messages.message_missing,
                }
            } else if field == Field::Email && !is_valid_email(value) {
                &messages.email_invalid
            } else {
                return None;
            };
            Some(FieldError {
                field,
                message: message.clone(),
            })
        })
        .collect()
}

/// What a single error display shows after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    Hidden,
    Shown(&'a str),
}

/// Everything a submit changes on the page. Every error display is either
/// hidden or shown anew, so nothing from an earlier attempt lingers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    errors: Vec<FieldError>,
    success: String,
}

impl SubmitOutcome {
    pub fn new(submission: &Submission, messages: &ContactMessages) -> Self {
        Self {
            errors: validate(submission, messages),
            success: messages.success.clone(),
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn slot(&self, field: Field) -> Slot<'_> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map_or(Slot::Hidden, |e| Slot::Shown(&e.message))
    }

    /// Success text to display, if the submission went through.
    pub fn success(&self) -> Option<&str> {
        self.accepted().then_some(self.success.as_str())
    }

    /// Only an accepted submission clears the form; a rejected one keeps
    /// what the visitor typed.
    pub fn clears_form(&self) -> bool {
        self.accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Submission {
        Submission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Geral".to_string(),
            message: "Olá".to_string(),
        }
    }

    #[test]
    fn all_empty_reports_four_distinct_errors() {
        let messages = ContactMessages::default();
        let errors = validate(&Submission::default(), &messages);

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(errors[0].message, messages.name_missing);
        assert_eq!(errors[1].message, messages.email_missing);
        assert_eq!(errors[2].message, messages.subject_missing);
        assert_eq!(errors[3].message, messages.message_missing);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let submission = Submission {
            message: "  \n\t ".to_string(),
            ..valid()
        };
        let errors = validate(&submission, &ContactMessages::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Message);
    }

    #[test]
    fn bad_email_reports_only_format_error() {
        let messages = ContactMessages::default();
        let submission = Submission {
            email: "bad-email".to_string(),
            ..valid()
        };
        let errors = validate(&submission, &messages);
        assert_eq!(
            errors,
            vec![FieldError {
                field: Field::Email,
                message: messages.email_invalid.clone(),
            }]
        );
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate(&valid(), &ContactMessages::default()).is_empty());
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let submission = Submission {
            name: "\u{feff}".to_string(),
            message: " \u{feff} ".to_string(),
            ..valid()
        };
        let fields: Vec<_> = validate(&submission, &ContactMessages::default())
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
        assert!(!is_valid_email("a\u{feff}b@x.com"));
        assert!(!is_valid_email("ana@exa\u{feff}mple.com"));
    }

    #[test]
    fn accepted_submit_shows_success_and_clears_form() {
        let messages = ContactMessages::default();
        let outcome = SubmitOutcome::new(&valid(), &messages);

        assert!(outcome.accepted());
        assert_eq!(outcome.success(), Some(messages.success.as_str()));
        assert!(outcome.clears_form());
        for field in Field::ALL {
            assert_eq!(outcome.slot(field), Slot::Hidden);
        }
    }

    #[test]
    fn rejected_submit_hides_success_and_keeps_values() {
        let messages = ContactMessages::default();
        let outcome = SubmitOutcome::new(&Submission::default(), &messages);

        assert_eq!(outcome.success(), None);
        assert!(!outcome.clears_form());
        assert_eq!(outcome.errors().len(), 4);
        assert_eq!(outcome.slot(Field::Name), Slot::Shown(&messages.name_missing));
        assert_eq!(outcome.slot(Field::Message), Slot::Shown(&messages.message_missing));
    }

    #[test]
    fn resubmit_hides_errors_from_earlier_attempt() {
        let messages = ContactMessages::default();
        let first = SubmitOutcome::new(&Submission::default(), &messages);
        assert!(Field::ALL.iter().all(|&f| first.slot(f) != Slot::Hidden));

        let fixed_email_only = Submission {
            email: "bad-email".to_string(),
            ..valid()
        };
        let second = SubmitOutcome::new(&fixed_email_only, &messages);
        assert_eq!(second.slot(Field::Name), Slot::Hidden);
        assert_eq!(second.slot(Field::Subject), Slot::Hidden);
        assert_eq!(second.slot(Field::Message), Slot::Hidden);
        assert_eq!(second.slot(Field::Email), Slot::Shown(&messages.email_invalid));
        assert_eq!(second.success(), None);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ANA@EXAMPLE.COM.BR"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(" ana@example.com"));
    }
}
