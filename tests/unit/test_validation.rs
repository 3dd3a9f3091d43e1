use formpipe::core::entities::SubmissionInput;
use formpipe::core::validation::{ValidationGate, Violation};

#[test]
fn accepts_well_formed_input() {
    for (name, email) in [
        ("Alice", "a@x.com"),
        ("Bob", "b@x.com"),
        ("O'Neil", "o.neil+forms@mail.example.co.uk"),
        (" ", "space@x.com"),
    ] {
        let input = SubmissionInput::new(name, email);
        assert!(ValidationGate::is_ready(&input), "{} <{}>", name, email);
    }
}

#[test]
fn rejects_empty_name() {
    let input = SubmissionInput::new("", "a@x.com");
    assert!(!ValidationGate::is_ready(&input));
    assert_eq!(
        ValidationGate::violations(&input),
        vec![Violation::NameRequired]
    );
}

#[test]
fn rejects_malformed_email() {
    for email in ["a", "a@", "a@@x.com", "a@x..com", "a@x.com.", ".a@x.com"] {
        let input = SubmissionInput::new("Alice", email);
        assert_eq!(
            ValidationGate::violations(&input),
            vec![Violation::EmailMalformed],
            "{}",
            email
        );
    }
}

#[test]
fn rejects_overlong_address() {
    let label = "d".repeat(60);
    let domain = vec![label.as_str(); 5].join(".");
    let email = format!("a@{}", domain);
    assert!(email.len() > 254);
    assert!(!ValidationGate::is_email_shaped(&email));
}

#[test]
fn violation_messages_are_readable() {
    assert_eq!(Violation::NameRequired.to_string(), "name is required");
    assert_eq!(Violation::EmailRequired.to_string(), "email is required");
    assert_eq!(
        Violation::EmailMalformed.to_string(),
        "email is not a valid address"
    );
}
