//! Thin HTTP client over `gloo-net` with an ordered interceptor chain.

pub mod byte_counter;
pub mod client;
pub mod config;
pub mod error;
pub mod interceptors;
pub mod request;

pub use byte_counter::{ByteCounter, ByteStats};
pub use client::{use_api_client, ApiClient};
pub use config::ApiConfig;
pub use error::{get_api_error, get_error_message, ApiClientError};
pub use interceptors::{AuthHeaderInterceptor, ByteCountingInterceptor, Interceptor, UnauthorizedLogger};
pub use request::{HttpMethod, IncomingResponse, OutgoingRequest};
