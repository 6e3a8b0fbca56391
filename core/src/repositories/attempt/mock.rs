//! In-memory AttemptRepository for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
use crate::errors::DomainError;

use super::AttemptRepository;

/// Mock implementation of AttemptRepository for testing
#[derive(Clone)]
pub struct MockAttemptRepository {
    attempts: Arc<Mutex<Vec<VerificationAttempt>>>,
    fail_inserts: Arc<Mutex<bool>>,
    fail_counts: Arc<Mutex<bool>>,
}

impl MockAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(Mutex::new(Vec::new())),
            fail_inserts: Arc::new(Mutex::new(false)),
            fail_counts: Arc::new(Mutex::new(false)),
        }
    }

    /// Pre-populate with `count` attempts for `ip_address` at `created_at`
    pub fn with_attempts(
        ip_address: &str,
        outcome: AttemptOutcome,
        count: usize,
        created_at: DateTime<Utc>,
    ) -> Self {
        let repo = Self::new();
        for _ in 0..count {
            repo.push(ip_address, outcome, created_at);
        }
        repo
    }

    /// Store a row with an explicit timestamp
    pub fn push(&self, ip_address: &str, outcome: AttemptOutcome, created_at: DateTime<Utc>) {
        let mut attempts = self.attempts.lock().unwrap();
        let id = attempts.len() as i64 + 1;
        attempts.push(VerificationAttempt {
            id,
            login: "seed".to_string(),
            phone: "905000000000".to_string(),
            ip_address: ip_address.to_string(),
            outcome,
            created_at,
        });
    }

    /// Make every insert fail
    pub fn set_fail_inserts(&self, fail: bool) {
        *self.fail_inserts.lock().unwrap() = fail;
    }

    /// Make every count fail
    pub fn set_fail_counts(&self, fail: bool) {
        *self.fail_counts.lock().unwrap() = fail;
    }

    pub fn get_all_attempts(&self) -> Vec<VerificationAttempt> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn outcomes(&self) -> Vec<AttemptOutcome> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.outcome)
            .collect()
    }
}

impl Default for MockAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttemptRepository for MockAttemptRepository {
    async fn insert(
        &self,
        attempt: &NewVerificationAttempt,
    ) -> Result<VerificationAttempt, DomainError> {
        if *self.fail_inserts.lock().unwrap() {
            return Err(DomainError::repository("Mock repository insert error"));
        }

        let mut attempts = self.attempts.lock().unwrap();
        let stored = VerificationAttempt {
            id: attempts.len() as i64 + 1,
            login: attempt.login.clone(),
            phone: attempt.phone.clone(),
            ip_address: attempt.ip_address.clone(),
            outcome: attempt.outcome,
            created_at: Utc::now(),
        };
        attempts.push(stored.clone());
        Ok(stored)
    }

    async fn count_since(
        &self,
        ip_address: &str,
        since: DateTime<Utc>,
        excluding: AttemptOutcome,
    ) -> Result<u64, DomainError> {
        if *self.fail_counts.lock().unwrap() {
            return Err(DomainError::repository("Mock repository count error"));
        }

        let attempts = self.attempts.lock().unwrap();
        let count = attempts
            .iter()
            .filter(|a| a.ip_address == ip_address)
            .filter(|a| a.created_at >= since)
            .filter(|a| a.outcome != excluding)
            .count();
        Ok(count as u64)
    }
}
