pub mod common;
pub mod toaster;
