use crate::UserRepository;

use fin_core::UniqueField;

use googletest::prelude::*;

#[test]
fn given_subject_constraint_message_then_maps_to_subject_field() {
    let field =
        UserRepository::violated_field("UNIQUE constraint failed: users.external_subject_id");

    assert_that!(field, some(eq(UniqueField::ExternalSubjectId)));
}

#[test]
fn given_email_constraint_message_then_maps_to_email_field() {
    let field = UserRepository::violated_field("UNIQUE constraint failed: users.email");

    assert_that!(field, some(eq(UniqueField::Email)));
}

#[test]
fn given_primary_key_constraint_message_then_no_unique_field() {
    let field = UserRepository::violated_field("UNIQUE constraint failed: users.id");

    assert_that!(field, none());
}

#[test]
fn given_unrelated_message_then_no_unique_field() {
    assert_that!(
        UserRepository::violated_field("UNIQUE constraint failed: index 'idx_other'"),
        none()
    );
}
