//! Services offered by the remote directory and the subscription relation.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::client::ClientId;

/// Identifier of a service in the remote directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub i64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for ServiceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A service entry as returned by the directory.
///
/// Entries in the hooked-services list carry only the id; catalog entries
/// also carry a cost, which may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Body of `GET /services`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub count: i64,
    #[serde(default)]
    pub items: Vec<Service>,
}

impl ServiceCatalog {
    /// Service ids in directory order.
    pub fn ids(&self) -> Vec<ServiceId> {
        self.items.iter().map(|s| s.id).collect()
    }

    /// Linear scan for a service by id.
    pub fn find(&self, id: ServiceId) -> Option<&Service> {
        self.items.iter().find(|s| s.id == id)
    }
}

/// A client subscribed to a service. Serialized as the add-service payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub client_id: ClientId,
    pub service_id: ServiceId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_deserializes_nullable_cost() {
        let json = r#"{"count": 2, "items": [{"id": 1, "cost": 2.5}, {"id": 2, "cost": null}]}"#;
        let catalog: ServiceCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.count, 2);
        assert_eq!(catalog.ids(), vec![ServiceId(1), ServiceId(2)]);
        assert_eq!(catalog.find(ServiceId(1)).unwrap().cost, Some(2.5));
        assert_eq!(catalog.find(ServiceId(2)).unwrap().cost, None);
        assert!(catalog.find(ServiceId(3)).is_none());
    }

    #[test]
    fn test_hooked_item_without_cost_and_extra_fields() {
        let service: Service =
            serde_json::from_str(r#"{"id": 9, "name": "Internet"}"#).unwrap();
        assert_eq!(service.id, ServiceId(9));
        assert!(service.cost.is_none());
    }

    #[test]
    fn test_subscription_payload_shape() {
        let sub = Subscription {
            client_id: ClientId(3),
            service_id: ServiceId(5),
        };
        assert_eq!(
            serde_json::to_value(sub).unwrap(),
            serde_json::json!({"client_id": 3, "service_id": 5})
        );
    }
}
