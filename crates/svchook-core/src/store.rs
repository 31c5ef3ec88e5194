//! Client store trait definition.

use tracing::info;

use svchook_types::client::{Client, ClientId};
use svchook_types::error::HarnessError;

/// Read access to the relational store of clients and balances.
///
/// Methods take `&mut self`: a store wraps one connection and queries on it
/// run strictly one after another. Implementations live in svchook-infra
/// (e.g., DataStore).
pub trait ClientStore: Send {
    /// First client whose balance is greater than zero, if any.
    ///
    /// An empty result is not an error.
    fn get_client_with_positive_balance(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Option<Client>, HarnessError>> + Send;

    /// Insert the seed client with the default balance and return it as read
    /// back from the store.
    fn insert_default_client(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Client, HarnessError>> + Send;

    /// Current balance of a client. Fails if the client has no balance row.
    fn get_balance(
        &mut self,
        client_id: ClientId,
    ) -> impl std::future::Future<Output = Result<f64, HarnessError>> + Send;
}

/// Resolve the client a test run acts on.
///
/// Uses the first positive-balance client; seeds exactly one default client
/// when there is none.
pub async fn active_client<S: ClientStore>(store: &mut S) -> Result<Client, HarnessError> {
    if let Some(client) = store.get_client_with_positive_balance().await? {
        return Ok(client);
    }

    let client = store.insert_default_client().await?;
    info!(client_id = %client.id, balance = client.balance, "Seeded default client");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeClientStore;
    use svchook_types::client::DEFAULT_CLIENT_BALANCE;

    #[tokio::test]
    async fn test_active_client_prefers_existing() {
        let mut store = FakeClientStore::new().with_client(4, 12.0);
        let client = active_client(&mut store).await.unwrap();
        assert_eq!(client, Client::new(4, 12.0));
        assert_eq!(store.inserted, 0);
    }

    #[tokio::test]
    async fn test_active_client_seeds_once() {
        let mut store = FakeClientStore::new().with_client(1, 0.0).with_client(2, -3.0);

        let first = active_client(&mut store).await.unwrap();
        assert_eq!(first.balance, DEFAULT_CLIENT_BALANCE);
        assert_eq!(store.inserted, 1);

        // the seeded client now satisfies the lookup
        let second = active_client(&mut store).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(store.inserted, 1);
    }
}
