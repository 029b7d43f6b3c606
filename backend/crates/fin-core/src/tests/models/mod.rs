mod external_identity;
mod unique_field;
mod user_record;
