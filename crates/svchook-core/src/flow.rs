//! One end-to-end hook run.
//!
//! Resolves the client, picks the first service it is not subscribed to,
//! subscribes it and reads the subscription back. Each step is a single call
//! on the store or the directory; the first failure ends the run.

use serde::Serialize;
use tracing::info;

use svchook_types::client::{Client, ClientId};
use svchook_types::error::{HarnessError, Operation};
use svchook_types::service::ServiceId;

use crate::directory::{ServiceApi, ServiceDirectory};
use crate::store::{ClientStore, active_client};

/// Result of a successful hook run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookOutcome {
    /// The client, with its balance as read before the service was added.
    pub client: Client,
    pub service_id: ServiceId,
    pub cost: f64,
    /// Number of services the client had before the run.
    pub hooked_before: usize,
}

pub struct HookFlow<A: ServiceApi> {
    directory: ServiceDirectory<A>,
}

impl<A: ServiceApi> HookFlow<A> {
    pub fn new(directory: ServiceDirectory<A>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ServiceDirectory<A> {
        &self.directory
    }

    /// Hook the first unhooked service for a client.
    ///
    /// With `client_id` set, that client's balance is read from the store;
    /// otherwise the active client is resolved (seeding one if needed).
    pub async fn run<S: ClientStore>(
        &self,
        store: &mut S,
        client_id: Option<ClientId>,
    ) -> Result<HookOutcome, HarnessError> {
        let client = match client_id {
            Some(id) => Client::new(id, store.get_balance(id).await?),
            None => active_client(store).await?,
        };

        let hooked = self.directory.get_hooked_services(client.id).await?;
        let all = self.directory.get_all_services().await?;
        let (service_id, cost) = self.directory.find_unhooked_service(&hooked, &all).await?;

        self.directory.add_service(client.id, service_id).await?;

        if !self.directory.is_service_hooked(client.id, service_id).await? {
            return Err(HarnessError::empty(
                Operation::PostRequest,
                format!(
                    "service {service_id} was accepted but is not hooked for client {}",
                    client.id
                ),
            ));
        }

        info!(
            client_id = %client.id,
            %service_id,
            cost,
            "Hook run complete"
        );

        Ok(HookOutcome {
            client,
            service_id,
            cost,
            hooked_before: hooked.len(),
        })
    }
}
