pub mod notify;
pub mod store;
