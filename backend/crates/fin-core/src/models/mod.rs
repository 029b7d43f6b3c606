pub mod external_identity;
pub mod new_user;
pub mod unique_field;
pub mod user_record;
