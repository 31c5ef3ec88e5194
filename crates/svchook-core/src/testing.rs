//! In-memory fakes of the store and directory ports for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use svchook_types::client::{Client, ClientId, DEFAULT_CLIENT_BALANCE};
use svchook_types::error::{HarnessError, Operation};
use svchook_types::service::{Service, ServiceCatalog, ServiceId, Subscription};

use crate::directory::ServiceApi;
use crate::store::ClientStore;

/// A directory that keeps subscriptions in memory.
pub struct FakeServiceApi {
    services: Vec<Service>,
    hooked: Mutex<HashMap<ClientId, Vec<ServiceId>>>,
    add_status: u16,
    unreachable: bool,
    drop_subscriptions: bool,
}

impl FakeServiceApi {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            hooked: Mutex::new(HashMap::new()),
            add_status: 202,
            unreachable: false,
            drop_subscriptions: false,
        }
    }

    pub fn with_service(mut self, id: i64, cost: Option<f64>) -> Self {
        self.services.push(Service {
            id: ServiceId(id),
            cost,
        });
        self
    }

    pub fn with_hooked(self, client_id: i64, service_id: i64) -> Self {
        self.hooked
            .lock()
            .unwrap()
            .entry(ClientId(client_id))
            .or_default()
            .push(ServiceId(service_id));
        self
    }

    pub fn with_add_status(mut self, status: u16) -> Self {
        self.add_status = status;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Accept subscriptions with 202 but never record them.
    pub fn dropping_subscriptions(mut self) -> Self {
        self.drop_subscriptions = true;
        self
    }

    fn ensure_reachable(&self, operation: Operation) -> Result<(), HarnessError> {
        if self.unreachable {
            return Err(HarnessError::transport(operation, "connection refused"));
        }
        Ok(())
    }
}

impl ServiceApi for FakeServiceApi {
    async fn check_connection(&self) -> Result<u16, HarnessError> {
        self.ensure_reachable(Operation::ConnectToApi)?;
        Ok(200)
    }

    async fn hooked_services(&self, client_id: ClientId) -> Result<Vec<Service>, HarnessError> {
        self.ensure_reachable(Operation::PostRequest)?;
        let hooked = self.hooked.lock().unwrap();
        Ok(hooked
            .get(&client_id)
            .map(|ids| ids.iter().map(|&id| Service { id, cost: None }).collect())
            .unwrap_or_default())
    }

    async fn catalog(&self) -> Result<ServiceCatalog, HarnessError> {
        self.ensure_reachable(Operation::GetRequest)?;
        Ok(ServiceCatalog {
            count: self.services.len() as i64,
            items: self.services.clone(),
        })
    }

    async fn add_service(&self, subscription: &Subscription) -> Result<u16, HarnessError> {
        self.ensure_reachable(Operation::PostRequest)?;
        if self.add_status == 202 && !self.drop_subscriptions {
            self.hooked
                .lock()
                .unwrap()
                .entry(subscription.client_id)
                .or_default()
                .push(subscription.service_id);
        }
        Ok(self.add_status)
    }
}

/// A client table kept in insertion order.
pub struct FakeClientStore {
    clients: Vec<Client>,
    pub inserted: usize,
}

impl FakeClientStore {
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
            inserted: 0,
        }
    }

    pub fn with_client(mut self, id: i64, balance: f64) -> Self {
        self.clients.push(Client::new(id, balance));
        self
    }
}

impl ClientStore for FakeClientStore {
    async fn get_client_with_positive_balance(&mut self) -> Result<Option<Client>, HarnessError> {
        Ok(self
            .clients
            .iter()
            .find(|c| c.has_positive_balance())
            .cloned())
    }

    async fn insert_default_client(&mut self) -> Result<Client, HarnessError> {
        let next_id = self.clients.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let client = Client::new(next_id, DEFAULT_CLIENT_BALANCE);
        self.clients.push(client.clone());
        self.inserted += 1;
        Ok(client)
    }

    async fn get_balance(&mut self, client_id: ClientId) -> Result<f64, HarnessError> {
        self.clients
            .iter()
            .find(|c| c.id == client_id)
            .map(|c| c.balance)
            .ok_or_else(|| {
                HarnessError::empty(
                    Operation::GetBalance,
                    format!("client {client_id} does not exist"),
                )
            })
    }
}
