use crate::{
    api::{ApiError, ApiResult, Product, SignupRequest, SignupResponse, StoreMap},
    content::NATIONWIDE_AVAILABILITY,
    state::toast::Toast,
    utils::utm::UtmParams,
};

pub const MISSING_FIELDS: &str = "Please fill all fields";
pub const SIGNUP_SUCCESS_TITLE: &str = "Welcome to the Fire Club! 🔥";
pub const SIGNUP_SUCCESS_DESCRIPTION: &str = "You'll receive exclusive tips and offers soon.";

/// The three signup inputs as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub nickname: String,
    pub email: String,
    pub state: String,
}

impl SignupFields {
    /// Presence check only; the server owns format validation.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.nickname.is_empty() || self.email.is_empty() || self.state.is_empty() {
            return Err(ApiError::validation(MISSING_FIELDS));
        }
        Ok(())
    }

    pub fn into_request(self, utm: UtmParams) -> SignupRequest {
        SignupRequest {
            nickname: self.nickname,
            email: self.email,
            state: self.state,
            utm_source: utm.source,
            utm_campaign: utm.campaign,
        }
    }
}

/// Remote products replace the defaults wholesale; an empty list means "use defaults".
pub fn products_or_default(remote: &[Product], defaults: &[Product]) -> Vec<Product> {
    if remote.is_empty() {
        defaults.to_vec()
    } else {
        remote.to_vec()
    }
}

pub fn stores_or_default(remote: &StoreMap, defaults: &StoreMap) -> StoreMap {
    if remote.is_empty() {
        defaults.clone()
    } else {
        remote.clone()
    }
}

/// Outlets to show for a single region after a lookup.
pub fn stores_for_state(
    state: &str,
    remote: ApiResult<Vec<String>>,
    defaults: &StoreMap,
) -> Vec<String> {
    match remote {
        Ok(outlets) if !outlets.is_empty() => outlets,
        _ => defaults
            .get(state)
            .filter(|outlets| !outlets.is_empty())
            .cloned()
            .unwrap_or_else(|| vec![NATIONWIDE_AVAILABILITY.to_string()]),
    }
}

pub fn success_toast(response: &SignupResponse) -> Toast {
    match response.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => Toast::new(message),
        None => Toast::new(SIGNUP_SUCCESS_TITLE).with_description(SIGNUP_SUCCESS_DESCRIPTION),
    }
}

pub fn failure_toast(error: &ApiError) -> Toast {
    Toast::destructive(error.error.clone())
}

pub fn outlet_summary(outlets: &[String]) -> String {
    outlets.join(", ")
}
