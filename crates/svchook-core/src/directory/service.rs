//! Service directory rules.
//!
//! Wraps a [`ServiceApi`] with the checks a test run relies on: a catalog
//! with nothing in it is an error, a service without a cost cannot be hooked,
//! and a subscription is only accepted on `202 Accepted`.

use tracing::{debug, info};

use svchook_types::client::ClientId;
use svchook_types::error::{BusinessRuleError, HarnessError, Operation};
use svchook_types::service::{ServiceId, Subscription};

use super::api::ServiceApi;

/// The only status the directory answers an accepted subscription with.
const ADD_SERVICE_ACCEPTED: u16 = 202;

/// Client-facing view of the remote service directory.
///
/// Generic over the transport so the rules can be exercised without a
/// network. Holds no state between calls.
pub struct ServiceDirectory<A: ServiceApi> {
    api: A,
}

impl<A: ServiceApi> ServiceDirectory<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Check that the directory answers at its base URL.
    ///
    /// Any transport or HTTP failure is an error; there is no "false" result.
    pub async fn check_connection(&self) -> Result<u16, HarnessError> {
        let status = self.api.check_connection().await?;
        info!(status, "Service directory is reachable");
        Ok(status)
    }

    /// Ids of the services the client is subscribed to.
    pub async fn get_hooked_services(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<ServiceId>, HarnessError> {
        let hooked: Vec<ServiceId> = self
            .api
            .hooked_services(client_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        debug!(%client_id, count = hooked.len(), "Fetched hooked services");
        Ok(hooked)
    }

    /// Ids of every service the directory offers.
    ///
    /// A catalog reporting `count == 0` means there is nothing to hook.
    pub async fn get_all_services(&self) -> Result<Vec<ServiceId>, HarnessError> {
        let catalog = self.api.catalog().await?;
        if catalog.count == 0 {
            return Err(BusinessRuleError::NothingToHook.into());
        }

        debug!(count = catalog.count, "Fetched service catalog");
        Ok(catalog.ids())
    }

    /// Cost of a single service.
    ///
    /// Returns `None` when the catalog has no entry for `service_id`. A
    /// matched entry whose cost is missing or zero is an error.
    pub async fn get_service_cost(
        &self,
        service_id: ServiceId,
    ) -> Result<Option<f64>, HarnessError> {
        let catalog = self.api.catalog().await?;
        if catalog.count == 0 {
            return Err(HarnessError::empty(
                Operation::GetRequest,
                "there is nothing to get cost",
            ));
        }

        match catalog.find(service_id) {
            None => Ok(None),
            Some(service) => match service.cost {
                Some(cost) if cost != 0.0 => Ok(Some(cost)),
                _ => Err(BusinessRuleError::ServiceCostMissing { service_id }.into()),
            },
        }
    }

    /// First service in `all` that is not in `hooked`, with its cost.
    ///
    /// Order follows `all`. Fails if every service is hooked or if the
    /// candidate's cost cannot be retrieved.
    pub async fn find_unhooked_service(
        &self,
        hooked: &[ServiceId],
        all: &[ServiceId],
    ) -> Result<(ServiceId, f64), HarnessError> {
        let Some(&service_id) = all.iter().find(|id| !hooked.contains(id)) else {
            return Err(BusinessRuleError::AllServicesHooked {
                hooked: hooked.len(),
            }
            .into());
        };

        match self.get_service_cost(service_id).await? {
            Some(cost) => {
                debug!(%service_id, cost, "Found unhooked service");
                Ok((service_id, cost))
            }
            None => Err(BusinessRuleError::ServiceCostMissing { service_id }.into()),
        }
    }

    /// Whether the client is currently subscribed to the service.
    pub async fn is_service_hooked(
        &self,
        client_id: ClientId,
        service_id: ServiceId,
    ) -> Result<bool, HarnessError> {
        let hooked = self.get_hooked_services(client_id).await?;
        Ok(hooked.contains(&service_id))
    }

    /// Subscribe the client to the service.
    ///
    /// Not idempotent: calling twice submits twice.
    pub async fn add_service(
        &self,
        client_id: ClientId,
        service_id: ServiceId,
    ) -> Result<(), HarnessError> {
        let subscription = Subscription {
            client_id,
            service_id,
        };
        let status = self.api.add_service(&subscription).await?;
        if status != ADD_SERVICE_ACCEPTED {
            return Err(BusinessRuleError::UnexpectedStatus {
                expected: ADD_SERVICE_ACCEPTED,
                actual: status,
            }
            .into());
        }

        info!(%client_id, %service_id, "Service added");
        Ok(())
    }
}
