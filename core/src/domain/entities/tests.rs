use super::*;

const ALL_OUTCOMES: [AttemptOutcome; 9] = [
    AttemptOutcome::Match,
    AttemptOutcome::Mismatch,
    AttemptOutcome::NotFound,
    AttemptOutcome::Ambiguous,
    AttemptOutcome::BlockedLimit,
    AttemptOutcome::ErrorHttp,
    AttemptOutcome::ErrorParse,
    AttemptOutcome::ErrorFlag,
    AttemptOutcome::ErrorInternal,
];

#[test]
fn test_outcome_tags_parse_back() {
    for outcome in ALL_OUTCOMES {
        assert_eq!(outcome.as_str().parse::<AttemptOutcome>(), Ok(outcome));
    }
    assert!("blocked".parse::<AttemptOutcome>().is_err());
}

#[test]
fn test_serde_uses_storage_tags() {
    let json = serde_json::to_string(&AttemptOutcome::BlockedLimit).unwrap();
    assert_eq!(json, "\"blocked_limit\"");
    let json = serde_json::to_string(&AttemptOutcome::NotFound).unwrap();
    assert_eq!(json, "\"not_found\"");
}

#[test]
fn test_error_subcategories() {
    let errors: Vec<_> = ALL_OUTCOMES.iter().filter(|o| o.is_error()).collect();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|o| o.as_str().starts_with("error_")));
}

#[test]
fn test_new_attempt() {
    let attempt = NewVerificationAttempt::new(
        "testuser",
        "905551234567",
        "203.0.113.7",
        AttemptOutcome::Match,
    );
    assert_eq!(attempt.login, "testuser");
    assert_eq!(attempt.outcome.to_string(), "match");
}
