//! Integration tests for the membership check pipeline through the public API

use std::sync::Arc;

use mc_core::mock::{MockAttemptRepository, MockBackofficeClient};
use mc_core::{
    AccountSearch, AccountSummary, AttemptOutcome, MembershipAccount, UpstreamError, UpstreamStep,
    VerificationRequest, VerificationService, VerificationStatus,
};
use mc_shared::RateLimitConfig;

fn service(
    client: &MockBackofficeClient,
    repo: &MockAttemptRepository,
) -> VerificationService<MockAttemptRepository, MockBackofficeClient> {
    VerificationService::new(
        Arc::new(repo.clone()),
        Arc::new(client.clone()),
        RateLimitConfig::default(),
    )
}

fn single_account(client: &MockBackofficeClient, account: MembershipAccount) {
    client.insert_search(
        "testuser",
        Ok(AccountSearch::new(
            1,
            vec![AccountSummary {
                id: 42,
                login: "testuser".to_string(),
            }],
        )),
    );
    client.insert_account(42, Ok(account));
}

#[tokio::test]
async fn test_ten_digit_input_matches_zero_prefixed_mobile() {
    let client = MockBackofficeClient::new();
    single_account(&client, MembershipAccount::new(42).with_mobile_phone("05551234567"));
    let repo = MockAttemptRepository::new();

    let report = service(&client, &repo)
        .verify(VerificationRequest::new("testuser", "5551234567", "192.0.2.1"))
        .await
        .unwrap();

    assert_eq!(report.status, VerificationStatus::Match);
    assert_eq!(repo.get_all_attempts()[0].phone, "905551234567");
}

#[tokio::test]
async fn test_different_landline_is_mismatch() {
    let client = MockBackofficeClient::new();
    single_account(&client, MembershipAccount::new(42).with_phone("5559998888"));
    let repo = MockAttemptRepository::new();

    let report = service(&client, &repo)
        .verify(VerificationRequest::new("testuser", "5551234567", "192.0.2.1"))
        .await
        .unwrap();

    assert_eq!(report.status, VerificationStatus::Mismatch);
    assert_eq!(repo.outcomes(), vec![AttemptOutcome::Mismatch]);
}

#[tokio::test]
async fn test_search_http_failure_is_error_with_http_tag() {
    let client = MockBackofficeClient::new();
    client.insert_search(
        "testuser",
        Err(UpstreamError::Status {
            step: UpstreamStep::GetClients,
            status: 502,
            body: "Bad Gateway".to_string(),
        }),
    );
    let repo = MockAttemptRepository::new();

    let report = service(&client, &repo)
        .verify(VerificationRequest::new("testuser", "5551234567", "192.0.2.1"))
        .await
        .unwrap();

    assert_eq!(report.status, VerificationStatus::Error);
    assert_eq!(repo.outcomes(), vec![AttemptOutcome::ErrorHttp]);
}
