//! Scriptable BackofficeClient for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::{AccountSearch, AccountSummary, MembershipAccount};
use crate::errors::{UpstreamError, UpstreamStep};

use super::traits::BackofficeClient;

/// Mock implementation of BackofficeClient for testing
///
/// Unknown logins resolve to an empty search and unknown ids to a
/// `Flagged` error, matching how the real API answers.
#[derive(Clone)]
pub struct MockBackofficeClient {
    searches: Arc<Mutex<HashMap<String, Result<AccountSearch, UpstreamError>>>>,
    accounts: Arc<Mutex<HashMap<i64, Result<MembershipAccount, UpstreamError>>>>,
    configured: bool,
    search_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
}

impl MockBackofficeClient {
    pub fn new() -> Self {
        Self {
            searches: Arc::new(Mutex::new(HashMap::new())),
            accounts: Arc::new(Mutex::new(HashMap::new())),
            configured: true,
            search_calls: Arc::new(AtomicUsize::new(0)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A client without credentials
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Register one account reachable by `login` with the given mobile phone
    pub fn with_account(self, id: i64, login: &str, mobile_phone: &str) -> Self {
        self.insert_search(
            login,
            Ok(AccountSearch::new(
                1,
                vec![AccountSummary {
                    id,
                    login: login.to_string(),
                }],
            )),
        );
        self.insert_account(
            id,
            Ok(MembershipAccount::new(id).with_mobile_phone(mobile_phone)),
        );
        self
    }

    /// Register `count` accounts sharing `login`
    pub fn with_duplicates(self, login: &str, count: usize) -> Self {
        let accounts = (0..count)
            .map(|i| AccountSummary {
                id: i as i64 + 1,
                login: login.to_string(),
            })
            .collect();
        self.insert_search(login, Ok(AccountSearch::new(count as u64, accounts)));
        self
    }

    pub fn insert_search(&self, login: &str, result: Result<AccountSearch, UpstreamError>) {
        self.searches
            .lock()
            .unwrap()
            .insert(login.to_string(), result);
    }

    pub fn insert_account(&self, id: i64, result: Result<MembershipAccount, UpstreamError>) {
        self.accounts.lock().unwrap().insert(id, result);
    }

    /// Number of `search_by_login` calls so far
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_account` calls so far
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Total remote calls so far
    pub fn total_calls(&self) -> usize {
        self.search_calls() + self.fetch_calls()
    }
}

impl Default for MockBackofficeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackofficeClient for MockBackofficeClient {
    async fn search_by_login(&self, login: &str) -> Result<AccountSearch, UpstreamError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searches
            .lock()
            .unwrap()
            .get(login)
            .cloned()
            .unwrap_or_else(|| Ok(AccountSearch::empty()))
    }

    async fn fetch_account(&self, id: i64) -> Result<MembershipAccount, UpstreamError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.accounts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| {
                Err(UpstreamError::Flagged {
                    step: UpstreamStep::GetClientById,
                    message: "Client not found".to_string(),
                })
            })
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
