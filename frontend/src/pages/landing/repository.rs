use crate::api::{ApiClient, ApiResult, Product, SignupRequest, SignupResponse, StoreMap};
use std::rc::Rc;

#[derive(Clone)]
pub struct LandingRepository {
    client: Rc<ApiClient>,
}

impl Default for LandingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<SignupResponse> {
        self.client.signup(request).await
    }

    pub async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        self.client.get_products().await
    }

    pub async fn fetch_stores(&self) -> ApiResult<StoreMap> {
        self.client.get_stores().await
    }

    pub async fn fetch_stores_by_state(&self, state: &str) -> ApiResult<Vec<String>> {
        self.client.get_stores_by_state(state).await
    }
}
