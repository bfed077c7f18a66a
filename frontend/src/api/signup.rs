use super::{
    client::ApiClient,
    types::{ApiError, ApiResult, DataEnvelope, SignupRecord, SignupRequest, SignupResponse},
};

pub const SIGNUP_FAILED: &str = "Failed to join Fire Club. Please try again.";
pub const SIGNUPS_FAILED: &str = "Failed to retrieve signups";

impl ApiClient {
    /// Registers a Fire Club signup. Any 2xx is an acknowledgment, even with an
    /// unreadable body; a server-provided message is surfaced on failure.
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<SignupResponse> {
        self.post_acknowledged::<_, SignupResponse>("/signup", request)
            .await
            .map_err(|err| ApiError::from_transport_preferring_server(&err, SIGNUP_FAILED))
    }

    /// Lists prior signups in server order.
    pub async fn get_signups(&self) -> ApiResult<Vec<SignupRecord>> {
        self.get_json::<DataEnvelope<Vec<SignupRecord>>>("/signups")
            .await
            .map(|envelope| envelope.data.unwrap_or_default())
            .map_err(|err| ApiError::from_transport(&err, SIGNUPS_FAILED))
    }
}
