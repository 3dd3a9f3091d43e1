use crate::core::entities::SubmissionInput;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// A rule the submission input failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    NameRequired,
    EmailRequired,
    EmailMalformed,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NameRequired => write!(f, "name is required"),
            Violation::EmailRequired => write!(f, "email is required"),
            Violation::EmailMalformed => write!(f, "email is not a valid address"),
        }
    }
}

/// Gate that decides whether an input may enter the pipeline.
pub struct ValidationGate;

impl ValidationGate {
    /// Whether the input satisfies every rule.
    pub fn is_ready(input: &SubmissionInput) -> bool {
        Self::violations(input).is_empty()
    }

    /// List every rule the input breaks, in field order.
    pub fn violations(input: &SubmissionInput) -> Vec<Violation> {
        let mut violations = Vec::new();
        if input.name.is_empty() {
            violations.push(Violation::NameRequired);
        }
        if input.email.is_empty() {
            violations.push(Violation::EmailRequired);
        } else if !Self::is_email_shaped(&input.email) {
            violations.push(Violation::EmailMalformed);
        }
        violations
    }

    /// Standard email shape check used by browser form validation.
    pub fn is_email_shaped(email: &str) -> bool {
        if email.len() > MAX_EMAIL_LENGTH {
            return false;
        }
        match email.split_once('@') {
            Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => {}
            _ => return false,
        }
        email_regex().is_match(email)
    }
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}
