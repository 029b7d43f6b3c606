pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use models::external_identity::ExternalIdentity;
pub use models::new_user::NewUser;
pub use models::unique_field::UniqueField;
pub use models::user_record::UserRecord;
pub use store::store_error::{StoreError, StoreResult};
pub use store::user_store::UserStore;

#[cfg(test)]
mod tests;
