//! Request and response bodies exactly as the backoffice API spells them.

use serde::{Deserialize, Serialize};

use mc_core::domain::value_objects::{AccountSearch, AccountSummary, MembershipAccount};

/// `POST Client/GetClients` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetClientsRequest<'a> {
    pub login: &'a str,
    /// Spelled this way by the remote API
    pub skeep_rows: u32,
    pub max_rows: u32,
    pub ordered_item: u32,
    pub is_ordered_desc: bool,
    pub is_start_with_search: bool,
    pub max_created_local_disable: bool,
    pub min_created_local_disable: bool,
}

impl<'a> GetClientsRequest<'a> {
    pub fn exact_login(login: &'a str, max_rows: u32) -> Self {
        Self {
            login,
            skeep_rows: 0,
            max_rows,
            ordered_item: 1,
            is_ordered_desc: true,
            is_start_with_search: false,
            max_created_local_disable: true,
            min_created_local_disable: true,
        }
    }
}

/// Common response wrapper
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub alert_message: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ClientsPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub objects: Option<Vec<ClientSummary>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ClientSummary {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ClientDetails {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub is_locked: Option<bool>,
}

impl From<ClientsPage> for AccountSearch {
    fn from(page: ClientsPage) -> Self {
        let accounts = page
            .objects
            .unwrap_or_default()
            .into_iter()
            .map(|summary| AccountSummary {
                id: summary.id,
                login: summary.login.unwrap_or_default(),
            })
            .collect();

        AccountSearch::new(page.count.unwrap_or(0), accounts)
    }
}

impl From<ClientDetails> for MembershipAccount {
    fn from(details: ClientDetails) -> Self {
        MembershipAccount {
            id: details.id,
            login: details.login,
            mobile_phone: details.mobile_phone,
            phone: details.phone,
            status: details.status,
            is_locked: details.is_locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_body_field_names() {
        let body = serde_json::to_value(GetClientsRequest::exact_login("testuser", 20)).unwrap();
        assert_eq!(body["Login"], "testuser");
        assert_eq!(body["SkeepRows"], 0);
        assert_eq!(body["MaxRows"], 20);
        assert_eq!(body["OrderedItem"], 1);
        assert_eq!(body["IsOrderedDesc"], true);
        assert_eq!(body["IsStartWithSearch"], false);
        assert_eq!(body["MaxCreatedLocalDisable"], true);
        assert_eq!(body["MinCreatedLocalDisable"], true);
    }

    #[test]
    fn test_search_page_with_nulls() {
        let envelope: Envelope<ClientsPage> =
            serde_json::from_str(r#"{"HasError":false,"Data":{"Count":null,"Objects":null}}"#)
                .unwrap();
        let search: AccountSearch = envelope.data.unwrap().into();
        assert!(search.is_empty());
    }

    #[test]
    fn test_details_with_null_phones() {
        let envelope: Envelope<ClientDetails> = serde_json::from_str(
            r#"{"HasError":false,"AlertMessage":null,"Data":{"Id":42,"Phone":null,"MobilePhone":"05551234567","Status":1,"IsLocked":false}}"#,
        )
        .unwrap();
        let account: MembershipAccount = envelope.data.unwrap().into();
        assert_eq!(account.id, 42);
        assert_eq!(account.registered_phone(), Some("05551234567"));
        assert_eq!(account.is_locked, Some(false));
    }
}
