use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, ApiResult, DataEnvelope, Product, StoreMap},
};

pub const PRODUCTS_FAILED: &str = "Failed to load products";
pub const STORES_FAILED: &str = "Failed to load store locations";
pub const STATE_STORES_FAILED: &str = "Failed to load store locations for this state";

/// Characters left as-is by `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

impl ApiClient {
    pub async fn get_products(&self) -> ApiResult<Vec<Product>> {
        self.get_json::<DataEnvelope<Vec<Product>>>("/products")
            .await
            .map(|envelope| envelope.data.unwrap_or_default())
            .map_err(|err| ApiError::from_transport(&err, PRODUCTS_FAILED))
    }

    pub async fn get_stores(&self) -> ApiResult<StoreMap> {
        self.get_json::<DataEnvelope<StoreMap>>("/stores")
            .await
            .map(|envelope| envelope.data.unwrap_or_default())
            .map_err(|err| ApiError::from_transport(&err, STORES_FAILED))
    }

    pub async fn get_stores_by_state(&self, state: &str) -> ApiResult<Vec<String>> {
        let path = format!("/stores/{}", encode_path_segment(state));
        self.get_json::<DataEnvelope<Vec<String>>>(&path)
            .await
            .map(|envelope| envelope.data.unwrap_or_default())
            .map_err(|err| ApiError::from_transport(&err, STATE_STORES_FAILED))
    }
}
