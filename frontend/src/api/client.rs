use futures::future::{select, Either};
use log::{debug, error};
use reqwest::{header::CONTENT_TYPE, Client, Method, Request, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::{future::Future, time::Duration};

use crate::{
    api::types::{MessageBody, TransportError},
    config,
};

/// Upper bound on any single request; callers are never timed out earlier.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        with_timeout(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let base_url = self.resolved_base_url().await;
        let builder = self.request(Method::GET, &format!("{}{}", base_url, path));
        self.execute(builder).await
    }

    /// POSTs `body` as JSON. Any 2xx counts as success: a body that does not
    /// decode into `T` yields `T::default()`.
    pub(crate) async fn post_acknowledged<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .request(Method::POST, &format!("{}{}", base_url, path))
            .json(body);
        self.execute_with(builder, RawResponse::json_or_default).await
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, TransportError> {
        self.execute_with(builder, RawResponse::json).await
    }

    async fn execute_with<T>(
        &self,
        builder: RequestBuilder,
        decode: fn(&RawResponse) -> Result<T, TransportError>,
    ) -> Result<T, TransportError> {
        let request = match builder.build() {
            Ok(request) => request,
            Err(err) => {
                return Err(intercept(
                    "<unbuilt request>",
                    TransportError::Request(err.to_string()),
                ))
            }
        };
        let target = format!("{} {}", request.method(), request.url());
        self.dispatch(request)
            .await
            .and_then(RawResponse::into_success)
            .and_then(|response| decode(&response))
            .map_err(|err| intercept(&target, err))
    }

    async fn dispatch(&self, request: Request) -> Result<RawResponse, TransportError> {
        #[cfg(test)]
        if let Some(responder) = mock_registry::find_mock(request.url().as_str()) {
            return responder.respond(&request).map(RawResponse::from);
        }
        self.send(request).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        let response = self.client.execute(request).await.map_err(classify)?;
        RawResponse::read(response).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        let millis = u32::try_from(REQUEST_TIMEOUT.as_millis()).unwrap_or(u32::MAX);
        // The timer covers reading the body too, not just the headers.
        let exchange = Box::pin(async move {
            let response = self.client.execute(request).await.map_err(classify)?;
            RawResponse::read(response).await
        });
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(millis));
        race_timeout(exchange, timer).await
    }
}

/// Resolves to the exchange's outcome, or `Timeout` if `timer` fires first.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn race_timeout<F, T>(exchange: F, timer: T) -> Result<RawResponse, TransportError>
where
    F: Future<Output = Result<RawResponse, TransportError>> + Unpin,
    T: Future<Output = ()> + Unpin,
{
    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(TransportError::Timeout),
    }
}

// The browser fetch API has no per-request timeout; `send` races a timer instead.
#[cfg(not(target_arch = "wasm32"))]
fn with_timeout(builder: RequestBuilder) -> RequestBuilder {
    builder.timeout(REQUEST_TIMEOUT)
}

#[cfg(target_arch = "wasm32")]
fn with_timeout(builder: RequestBuilder) -> RequestBuilder {
    builder
}

/// Response interceptor: logs every transport-level failure before the
/// calling operation converts it into its own `ApiError`.
fn intercept(target: &str, err: TransportError) -> TransportError {
    error!("API Error: {}: {}", target, err);
    err
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(err.to_string())
    }
}

#[derive(Debug)]
struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl RawResponse {
    async fn read(response: reqwest::Response) -> Result<Self, TransportError> {
        let status = response.status();
        let body = response.bytes().await.map_err(classify)?.to_vec();
        Ok(Self { status, body })
    }

    fn into_success(self) -> Result<Self, TransportError> {
        if self.status.is_success() {
            return Ok(self);
        }
        let message = serde_json::from_slice::<MessageBody>(&self.body)
            .ok()
            .and_then(|body| body.message);
        Err(TransportError::Status {
            status: self.status.as_u16(),
            message,
        })
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_slice(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    fn json_or_default<T: DeserializeOwned + Default>(&self) -> Result<T, TransportError> {
        Ok(serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            debug!("Accepting {} response with an unreadable body: {}", self.status, err);
            T::default()
        }))
    }
}

#[cfg(test)]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(test)]
mod mock_registry {
    use super::{RawResponse, Request, StatusCode, TransportError};
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &Request) -> Result<MockResponse, TransportError>;
    }

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Option<Value>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: Some(body),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self { status, body: None }
        }
    }

    impl From<MockResponse> for RawResponse {
        fn from(mock: MockResponse) -> Self {
            Self {
                status: StatusCode::from_u16(mock.status).unwrap_or(StatusCode::OK),
                body: mock
                    .body
                    .map(|body| serde_json::to_vec(&body).unwrap_or_default())
                    .unwrap_or_default(),
            }
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().expect("mock registry lock");
        mocks.retain(|(base, _)| *base != base_url);
        mocks.push((base_url, responder));
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .rev()
            .find(|(base, _)| url.starts_with(base.as_str()))
            .map(|(_, responder)| Arc::clone(responder))
    }
}
