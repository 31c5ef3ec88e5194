//! HttpServiceApi -- concrete [`ServiceApi`] implementation over reqwest.
//!
//! One request per call, transport defaults for timeouts, no retries. The
//! configured static headers are attached to every request.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use svchook_core::directory::ServiceApi;
use svchook_types::client::ClientId;
use svchook_types::config::ApiConfig;
use svchook_types::error::{HarnessError, Operation};
use svchook_types::service::{Service, ServiceCatalog, Subscription};

use super::types::{HookedServicesRequest, HookedServicesResponse, is_empty_body};

pub struct HttpServiceApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpServiceApi {
    /// Build a client for the directory described by `config`.
    ///
    /// Fails if a configured header name or value is not valid HTTP.
    pub fn new(config: ApiConfig) -> Result<Self, HarnessError> {
        let headers = header_map(&config)?;
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| HarnessError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get(&self, path: &str, op: Operation) -> Result<reqwest::Response, HarnessError> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");

        self.http
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| HarnessError::transport(op, e))
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, HarnessError> {
        let op = Operation::PostRequest;
        let url = self.config.endpoint(path);
        debug!(%url, "POST");

        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| HarnessError::transport(op, e))
    }
}

fn header_map(config: &ApiConfig) -> Result<HeaderMap, HarnessError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HarnessError::Config(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            HarnessError::Config(format!("invalid value for header '{}': {e}", name.as_str()))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Decode a JSON body, treating an empty or null body as an empty result.
async fn decode_body<T: DeserializeOwned>(
    response: reqwest::Response,
    op: Operation,
    what: &str,
) -> Result<T, HarnessError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| HarnessError::transport(op, e))?;

    let value: serde_json::Value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| HarnessError::transport(op, format!("malformed response body: {e}")))?
    };

    if is_empty_body(&value) {
        return Err(HarnessError::empty(
            op,
            format!("nothing returned from API after trying get {what}"),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| HarnessError::transport(op, format!("unexpected response body: {e}")))
}

impl ServiceApi for HttpServiceApi {
    async fn check_connection(&self) -> Result<u16, HarnessError> {
        let response = self.get("/", Operation::ConnectToApi).await?;
        Ok(response.status().as_u16())
    }

    async fn hooked_services(&self, client_id: ClientId) -> Result<Vec<Service>, HarnessError> {
        let response = self
            .post("/client/services", &HookedServicesRequest { client_id })
            .await?;
        let body: HookedServicesResponse =
            decode_body(response, Operation::PostRequest, "hooked services").await?;
        Ok(body.items)
    }

    async fn catalog(&self) -> Result<ServiceCatalog, HarnessError> {
        let response = self.get("/services", Operation::GetRequest).await?;
        decode_body(response, Operation::GetRequest, "all services").await
    }

    async fn add_service(&self, subscription: &Subscription) -> Result<u16, HarnessError> {
        let response = self.post("/client/add_service", subscription).await?;
        Ok(response.status().as_u16())
    }
}
