pub mod store_error;
pub mod user_store;
