//! Request and response bodies of the service directory API.

use serde::{Deserialize, Serialize};

use svchook_types::client::ClientId;
use svchook_types::service::Service;

/// Body of `POST /client/services`.
#[derive(Debug, Clone, Serialize)]
pub struct HookedServicesRequest {
    pub client_id: ClientId,
}

/// Response of `POST /client/services`.
#[derive(Debug, Clone, Deserialize)]
pub struct HookedServicesResponse {
    pub items: Vec<Service>,
}

/// Whether a decoded body counts as "nothing returned".
pub(crate) fn is_empty_body(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Number(_) => false,
    }
}
