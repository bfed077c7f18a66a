pub mod hero;
pub mod products;
pub mod signup_form;
pub mod store_locator;
pub mod support;
