use crate::{CoreError, ExternalIdentity, NewUser};

use googletest::prelude::*;

#[test]
fn given_subject_and_email_when_validated_then_ok() {
    let identity = ExternalIdentity::new("ext-1", "a@x.com");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_empty_subject_when_validated_then_validation_error() {
    let identity = ExternalIdentity::new("", "a@x.com");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_whitespace_subject_when_validated_then_validation_error() {
    let identity = ExternalIdentity::new("   ", "a@x.com");

    assert_that!(identity.validate(), err(anything()));
}

#[test]
fn given_identity_with_profile_when_converted_to_new_user_then_all_fields_carry_over() {
    let identity = ExternalIdentity::new("ext-9", "new@x.com")
        .with_display_name("Jane Doe")
        .with_avatar_url("https://img.example.com/jane.png");

    let new_user = NewUser::from_identity(&identity);

    assert_that!(new_user.external_subject_id.as_deref(), some(eq("ext-9")));
    assert_that!(new_user.email, eq("new@x.com"));
    assert_that!(new_user.display_name.as_deref(), some(eq("Jane Doe")));
    assert_that!(
        new_user.avatar_url.as_deref(),
        some(eq("https://img.example.com/jane.png"))
    );
}

#[test]
fn given_provisioned_user_then_has_no_subject_id() {
    let new_user = NewUser::provisioned("a@x.com");

    assert_that!(new_user.external_subject_id, none());
    assert_that!(new_user.email, eq("a@x.com"));
}
