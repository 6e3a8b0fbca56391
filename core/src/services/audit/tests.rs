use std::sync::Arc;

use crate::domain::entities::AttemptOutcome;
use crate::repositories::MockAttemptRepository;
use crate::services::audit::AttemptLogger;

#[tokio::test]
async fn test_record_appends_row() {
    let repo = Arc::new(MockAttemptRepository::new());
    let logger = AttemptLogger::new(Arc::clone(&repo));

    let stored = logger
        .record("alice", "905551234567", "198.51.100.4", AttemptOutcome::NotFound)
        .await;

    assert!(stored.is_some());
    let attempts = repo.get_all_attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].login, "alice");
    assert_eq!(attempts[0].phone, "905551234567");
    assert_eq!(attempts[0].ip_address, "198.51.100.4");
    assert_eq!(attempts[0].outcome, AttemptOutcome::NotFound);
}

#[tokio::test]
async fn test_record_swallows_store_failure() {
    let repo = Arc::new(MockAttemptRepository::new());
    repo.set_fail_inserts(true);
    let logger = AttemptLogger::new(Arc::clone(&repo));

    let stored = logger
        .record("alice", "905551234567", "198.51.100.4", AttemptOutcome::Match)
        .await;

    assert!(stored.is_none());
    assert!(repo.get_all_attempts().is_empty());
}
