//! Request/response hooks run by [`ApiClient`](super::ApiClient) in
//! registration order.

use super::byte_counter::ByteCounter;
use super::request::{IncomingResponse, OutgoingRequest};
use crate::shared::storage::KeyValueStorage;
use contracts::shared::preferences::AUTH_TOKEN_KEY;

pub trait Interceptor {
    /// Inspect or amend a request before it is sent.
    fn on_request(&self, _request: &mut OutgoingRequest) {}

    /// Observe a received response, whatever its status.
    fn on_response(&self, _request: &OutgoingRequest, _response: &IncomingResponse) {}
}

/// Adds `Authorization: Bearer <token>` when a token is stored.
#[derive(Debug, Clone)]
pub struct AuthHeaderInterceptor<S> {
    storage: S,
}

impl<S> AuthHeaderInterceptor<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStorage> Interceptor for AuthHeaderInterceptor<S> {
    fn on_request(&self, request: &mut OutgoingRequest) {
        match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => {
                request.set_header("Authorization", format!("Bearer {}", token));
            }
            Ok(_) => {}
            Err(e) => log::warn!("Failed to read auth token: {}", e),
        }
    }
}

/// Accumulates request and response sizes into a shared [`ByteCounter`].
#[derive(Debug, Clone)]
pub struct ByteCountingInterceptor {
    counter: ByteCounter,
}

impl ByteCountingInterceptor {
    pub fn new(counter: ByteCounter) -> Self {
        Self { counter }
    }
}

impl Interceptor for ByteCountingInterceptor {
    fn on_request(&self, request: &mut OutgoingRequest) {
        self.counter.add_sent(request.wire_size());
    }

    fn on_response(&self, _request: &OutgoingRequest, response: &IncomingResponse) {
        self.counter.add_received(response.wire_size());
    }
}

/// Logs HTTP 401 responses. Session state is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnauthorizedLogger;

impl Interceptor for UnauthorizedLogger {
    fn on_response(&self, request: &OutgoingRequest, response: &IncomingResponse) {
        if response.status == 401 {
            log::error!("Unauthorized access: {} {}", request.method.as_str(), request.url);
        }
    }
}
