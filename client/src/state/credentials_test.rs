use super::*;

#[test]
fn set_email_leaves_password_unchanged() {
    let state = Credentials { email: String::new(), password: "secret".to_owned() };
    let next = state.reduce(CredentialsAction::SetEmail("a@b.com".to_owned()));
    assert_eq!(next.email, "a@b.com");
    assert_eq!(next.password, "secret");
}

#[test]
fn set_password_leaves_email_unchanged() {
    let state = Credentials { email: "a@b.com".to_owned(), password: String::new() };
    let next = state.reduce(CredentialsAction::SetPassword("secret".to_owned()));
    assert_eq!(next.email, "a@b.com");
    assert_eq!(next.password, "secret");
}

#[test]
fn set_email_replaces_wholesale() {
    let state = Credentials::default()
        .reduce(CredentialsAction::SetEmail("first@b.com".to_owned()))
        .reduce(CredentialsAction::SetEmail("x".to_owned()));
    assert_eq!(state.email, "x");
    assert!(state.password.is_empty());
}

#[test]
fn no_trimming_or_validation() {
    let state = Credentials::default().reduce(CredentialsAction::SetEmail("  not an email ".to_owned()));
    assert_eq!(state.email, "  not an email ");
}
