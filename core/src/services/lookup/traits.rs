//! Backoffice client trait

use async_trait::async_trait;

use crate::domain::value_objects::{AccountSearch, MembershipAccount};
use crate::errors::UpstreamError;

/// Remote account-management API
#[async_trait]
pub trait BackofficeClient: Send + Sync {
    /// Search accounts by exact login (`GetClients`)
    async fn search_by_login(&self, login: &str) -> Result<AccountSearch, UpstreamError>;

    /// Fetch one account by id (`GetClientById`)
    async fn fetch_account(&self, id: i64) -> Result<MembershipAccount, UpstreamError>;

    /// Whether credentials are available; without them no call is attempted
    fn is_configured(&self) -> bool;
}
