use super::byte_counter::ByteCounter;
use super::config::ApiConfig;
use super::error::ApiClientError;
use super::interceptors::{AuthHeaderInterceptor, ByteCountingInterceptor, Interceptor, UnauthorizedLogger};
use super::request::{HttpMethod, IncomingResponse, OutgoingRequest};
use crate::shared::storage::BrowserStorage;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

type SharedInterceptor = Arc<dyn Interceptor + Send + Sync>;

/// JSON API client. Cheap to clone; clones share config and interceptors.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    interceptors: Vec<SharedInterceptor>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            interceptors: Vec::new(),
        }
    }

    /// Client with the standard chain: bearer token, byte counting, 401 logging.
    pub fn with_defaults(config: ApiConfig, counter: ByteCounter) -> Self {
        Self::new(config)
            .with_interceptor(AuthHeaderInterceptor::new(BrowserStorage))
            .with_interceptor(ByteCountingInterceptor::new(counter))
            .with_interceptor(UnauthorizedLogger)
    }

    pub fn with_interceptor(mut self, interceptor: impl Interceptor + Send + Sync + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the request for `path` and run the request hooks over it.
    pub fn prepare(&self, method: HttpMethod, path: &str, body: Option<String>) -> OutgoingRequest {
        let mut request = OutgoingRequest::new(method, self.config.url(path));
        for (name, value) in &self.config.default_headers {
            request.set_header(name, value.clone());
        }
        request.body = body;

        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request);
        }
        request
    }

    /// Run the response hooks, then reject non-2xx statuses.
    pub fn complete(
        &self,
        request: &OutgoingRequest,
        response: IncomingResponse,
    ) -> Result<IncomingResponse, ApiClientError> {
        for interceptor in &self.interceptors {
            interceptor.on_response(request, &response);
        }

        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiClientError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<IncomingResponse, ApiClientError> {
        let request = self.prepare(method, path, body);
        let response = self.transport(&request).await?;
        self.complete(&request, response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let response = self.send(HttpMethod::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Put, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Patch, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let response = self.send(HttpMethod::Delete, path, None).await?;
        decode(&response)
    }

    /// Single fetch with the configured timeout. The request is aborted once
    /// the timer fires.
    async fn transport(&self, request: &OutgoingRequest) -> Result<IncomingResponse, ApiClientError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiClientError::Build(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));
        let timeout_ms = self.config.timeout_ms;

        let _timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let signal = controller.signal();
        builder = builder.abort_signal(Some(&signal));

        let outgoing = match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder.build(),
        }
        .map_err(|e| ApiClientError::Build(e.to_string()))?;

        let failure = |e: gloo_net::Error| {
            if timed_out.get() {
                ApiClientError::Timeout(timeout_ms)
            } else {
                ApiClientError::Network(e.to_string())
            }
        };

        let response = outgoing.send().await.map_err(failure)?;
        let status = response.status();
        let headers = response.headers().entries().collect();
        let body = response.text().await.map_err(failure)?;

        Ok(IncomingResponse {
            status,
            headers,
            body,
        })
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiClientError> {
    serde_json::to_string(body).map_err(|e| ApiClientError::Encode(e.to_string()))
}

/// Decode a JSON body; an empty body decodes as `null`.
fn decode<T: DeserializeOwned>(response: &IncomingResponse) -> Result<T, ApiClientError> {
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| ApiClientError::Decode(e.to_string()))
}

/// Hook to use the API client provided at the application root.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found. Provide it at the application root.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use contracts::shared::preferences::AUTH_TOKEN_KEY;

    fn client(counter: &ByteCounter, token: Option<&str>) -> ApiClient {
        let storage = match token {
            Some(token) => MemoryStorage::with_item(AUTH_TOKEN_KEY, token),
            None => MemoryStorage::new(),
        };
        ApiClient::new(ApiConfig::new("/api"))
            .with_interceptor(AuthHeaderInterceptor::new(storage))
            .with_interceptor(ByteCountingInterceptor::new(counter.clone()))
            .with_interceptor(UnauthorizedLogger)
    }

    fn response(status: u16, body: &str) -> IncomingResponse {
        IncomingResponse {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: body.into(),
        }
    }

    #[test]
    fn prepare_applies_defaults_and_chain() {
        let counter = ByteCounter::new();
        let api = client(&counter, Some("tok"));
        let request = api.prepare(HttpMethod::Post, "/users", Some(r#"{"name":"Ann"}"#.into()));

        assert_eq!(request.url, "/api/users");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        // counted after the auth header was added
        assert_eq!(counter.sent(), request.wire_size());
    }

    #[test]
    fn one_round_trip_totals_both_directions() {
        let counter = ByteCounter::new();
        let api = client(&counter, None);

        let request = api.prepare(HttpMethod::Get, "/test-endpoint", None);
        let reply = response(200, r#"{"ok":true}"#);
        let received = reply.wire_size();
        api.complete(&request, reply).unwrap();

        assert_eq!(counter.sent(), request.wire_size());
        assert_eq!(counter.received(), received);
        assert_eq!(counter.total(), counter.sent() + counter.received());

        counter.reset();
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn error_statuses_are_counted_and_propagated() {
        let counter = ByteCounter::new();
        let api = client(&counter, None);
        let request = api.prepare(HttpMethod::Get, "/secret", None);

        let err = api.complete(&request, response(401, r#"{"message":"no"}"#)).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(counter.received() > 0);

        let err = api.complete(&request, response(404, "")).unwrap_err();
        assert_eq!(
            err,
            ApiClientError::Status {
                status: 404,
                body: String::new()
            }
        );
    }

    #[test]
    fn decode_handles_empty_and_bad_bodies() {
        let value: serde_json::Value = decode(&response(204, "")).unwrap();
        assert!(value.is_null());

        let items: Vec<u32> = decode(&response(200, "[1,2,3]")).unwrap();
        assert_eq!(items, vec![1, 2, 3]);

        let err = decode::<Vec<u32>>(&response(200, "nope")).unwrap_err();
        assert!(matches!(err, ApiClientError::Decode(_)));
    }
}
