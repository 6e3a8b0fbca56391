//! Resolve a login to exactly one account and compare its phone.

use std::sync::Arc;

use mc_shared::utils::{mask_phone_number, normalize_tr_phone};

use crate::errors::UpstreamError;

use super::traits::BackofficeClient;

/// Outcome of a lookup. Business results and upstream failures alike are
/// values here; the caller decides how each one is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Match,
    Mismatch,
    /// Account found but no normalizable phone on file
    PhoneUnavailable,
    NotFound,
    Ambiguous,
    Failed(UpstreamError),
}

pub struct MembershipLookupService<B>
where
    B: BackofficeClient,
{
    client: Arc<B>,
}

impl<B> MembershipLookupService<B>
where
    B: BackofficeClient,
{
    pub fn new(client: Arc<B>) -> Self {
        Self { client }
    }

    /// Look up `login` and compare the registered phone with `normalized_phone`
    ///
    /// At most two remote calls, in order; no retries.
    pub async fn lookup(&self, login: &str, normalized_phone: &str) -> LookupOutcome {
        let search = match self.client.search_by_login(login).await {
            Ok(search) => search,
            Err(e) => return LookupOutcome::Failed(e),
        };

        if search.is_empty() {
            return LookupOutcome::NotFound;
        }
        if search.is_ambiguous() {
            tracing::debug!(
                count = search.count,
                returned = search.accounts.len(),
                "Login resolved to more than one account"
            );
            return LookupOutcome::Ambiguous;
        }
        let account_id = match search.single() {
            Some(summary) => summary.id,
            None => return LookupOutcome::NotFound,
        };

        let account = match self.client.fetch_account(account_id).await {
            Ok(account) => account,
            Err(e) => return LookupOutcome::Failed(e),
        };

        let registered = match account.registered_phone().and_then(normalize_tr_phone) {
            Some(phone) => phone,
            None => {
                tracing::debug!(account_id = account_id, "Account has no usable phone");
                return LookupOutcome::PhoneUnavailable;
            }
        };

        if registered == normalized_phone {
            LookupOutcome::Match
        } else {
            tracing::debug!(
                account_id = account_id,
                registered = %mask_phone_number(&registered),
                submitted = %mask_phone_number(normalized_phone),
                "Registered phone differs"
            );
            LookupOutcome::Mismatch
        }
    }
}
