pub mod location;
pub mod utm;
