#![allow(dead_code)]

use fin_core::NewUser;

/// A user arriving through the provider for the first time
pub fn create_test_new_user(subject: &str, email: &str) -> NewUser {
    NewUser {
        external_subject_id: Some(subject.to_string()),
        email: email.to_string(),
        display_name: Some("Test User".to_string()),
        avatar_url: Some("https://img.example.com/test.png".to_string()),
    }
}

/// A user created by an administrator before any sign-in
pub fn create_provisioned_user(email: &str) -> NewUser {
    NewUser::provisioned(email)
}
