//! Read-only views of backoffice accounts. Never cached or persisted.

use serde::{Deserialize, Serialize};

/// One hit of an account search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: i64,
    pub login: String,
}

/// Result of searching accounts by login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSearch {
    /// Total reported by the backoffice, may exceed `accounts.len()`
    pub count: u64,
    pub accounts: Vec<AccountSummary>,
}

impl AccountSearch {
    pub fn new(count: u64, accounts: Vec<AccountSummary>) -> Self {
        Self { count, accounts }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.accounts.is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.count > 1 || self.accounts.len() > 1
    }

    /// The single matching account, if the search resolved to exactly one
    pub fn single(&self) -> Option<&AccountSummary> {
        if self.is_empty() || self.is_ambiguous() {
            return None;
        }
        self.accounts.first()
    }
}

/// Account details returned by the backoffice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipAccount {
    pub id: i64,
    pub login: Option<String>,
    pub mobile_phone: Option<String>,
    pub phone: Option<String>,
    pub status: Option<i32>,
    pub is_locked: Option<bool>,
}

impl MembershipAccount {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_mobile_phone(mut self, mobile_phone: impl Into<String>) -> Self {
        self.mobile_phone = Some(mobile_phone.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Phone on file: mobile if non-empty, otherwise the landline field
    pub fn registered_phone(&self) -> Option<&str> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
        }

        non_empty(&self.mobile_phone).or_else(|| non_empty(&self.phone))
    }
}
