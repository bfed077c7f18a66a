mod catalog;
pub mod client;
mod signup;
pub mod types;

pub use catalog::{PRODUCTS_FAILED, STATE_STORES_FAILED, STORES_FAILED};
pub use client::*;
pub use signup::{SIGNUPS_FAILED, SIGNUP_FAILED};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
