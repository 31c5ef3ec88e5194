//! Service directory API trait definition.

use svchook_types::client::ClientId;
use svchook_types::error::HarnessError;
use svchook_types::service::{Service, ServiceCatalog, Subscription};

/// Raw calls against the remote service directory.
///
/// Implementations perform exactly one request per call and map transport
/// failures, non-2xx statuses and empty bodies to `HarnessError`. They apply
/// no business rules: a zero `count` or a non-202 add status is returned as-is.
/// Implementations live in svchook-infra (e.g., HttpServiceApi).
pub trait ServiceApi: Send + Sync {
    /// `GET /`. Returns the status code of a 2xx response.
    fn check_connection(
        &self,
    ) -> impl std::future::Future<Output = Result<u16, HarnessError>> + Send;

    /// `POST /client/services`. Fails with `EmptyResult` on an empty body.
    fn hooked_services(
        &self,
        client_id: ClientId,
    ) -> impl std::future::Future<Output = Result<Vec<Service>, HarnessError>> + Send;

    /// `GET /services`. Fails with `EmptyResult` on an empty body.
    fn catalog(
        &self,
    ) -> impl std::future::Future<Output = Result<ServiceCatalog, HarnessError>> + Send;

    /// `POST /client/add_service`. Returns the status code of a 2xx response.
    fn add_service(
        &self,
        subscription: &Subscription,
    ) -> impl std::future::Future<Output = Result<u16, HarnessError>> + Send;
}
