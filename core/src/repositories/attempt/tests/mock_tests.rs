use chrono::{Duration, Utc};

use crate::domain::entities::{AttemptOutcome, NewVerificationAttempt};
use crate::repositories::attempt::{AttemptRepository, MockAttemptRepository};

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let repo = MockAttemptRepository::new();
    let first = repo
        .insert(&NewVerificationAttempt::new(
            "alice",
            "905551234567",
            "10.0.0.1",
            AttemptOutcome::Match,
        ))
        .await
        .unwrap();
    let second = repo
        .insert(&NewVerificationAttempt::new(
            "bob",
            "905551234568",
            "10.0.0.1",
            AttemptOutcome::Mismatch,
        ))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(repo.get_all_attempts().len(), 2);
}

#[tokio::test]
async fn test_count_since_filters_ip_window_and_outcome() {
    let now = Utc::now();
    let repo = MockAttemptRepository::new();
    repo.push("10.0.0.1", AttemptOutcome::Match, now);
    repo.push("10.0.0.1", AttemptOutcome::NotFound, now);
    repo.push("10.0.0.1", AttemptOutcome::BlockedLimit, now);
    repo.push("10.0.0.1", AttemptOutcome::Match, now - Duration::days(2));
    repo.push("10.0.0.2", AttemptOutcome::Match, now);

    let count = repo
        .count_since(
            "10.0.0.1",
            now - Duration::hours(1),
            AttemptOutcome::BlockedLimit,
        )
        .await
        .unwrap();

    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_failure_switches() {
    let repo = MockAttemptRepository::new();
    repo.set_fail_counts(true);
    assert!(repo
        .count_since("10.0.0.1", Utc::now(), AttemptOutcome::BlockedLimit)
        .await
        .is_err());

    repo.set_fail_inserts(true);
    let attempt =
        NewVerificationAttempt::new("alice", "905551234567", "10.0.0.1", AttemptOutcome::Match);
    assert!(repo.insert(&attempt).await.is_err());
    assert!(repo.get_all_attempts().is_empty());
}
