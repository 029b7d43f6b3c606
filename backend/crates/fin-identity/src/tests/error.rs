use crate::ResolveError;

use fin_auth::AuthError;
use fin_core::{CoreError, StoreError, UniqueField};

use std::panic::Location;

use error_location::ErrorLocation;
use googletest::prelude::*;

#[test]
fn given_validation_error_when_converted_then_invalid_identity_keeps_message() {
    let core = CoreError::Validation {
        message: "external_subject_id cannot be empty".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ResolveError::from(core);

    assert!(matches!(
        error,
        ResolveError::InvalidIdentity { ref message, .. }
            if message == "external_subject_id cannot be empty"
    ));
    assert_that!(error.error_code(), eq("INVALID_IDENTITY"));
}

#[test]
fn given_store_errors_when_converted_then_map_onto_resolver_taxonomy() {
    let unavailable = ResolveError::from(StoreError::unavailable("timeout"));
    let corrupt = ResolveError::from(StoreError::corrupt("bad uuid"));
    let unique = ResolveError::from(StoreError::uniqueness_violation(UniqueField::Email));

    assert_that!(unavailable.error_code(), eq("STORE_UNAVAILABLE"));
    assert_that!(corrupt.error_code(), eq("STORE_UNAVAILABLE"));
    assert_that!(unique.error_code(), eq("IDENTITY_CONFLICT"));
}

#[test]
fn given_auth_error_when_converted_then_not_retryable() {
    let auth = AuthError::ProviderUnavailable {
        message: "provider timeout".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ResolveError::from(auth);

    assert_that!(error.error_code(), eq("AUTH_FAILED"));
    assert!(!error.is_retryable());
}

#[test]
fn given_invalid_claim_when_converted_then_invalid_identity_naming_the_claim() {
    let claim = AuthError::InvalidClaim {
        claim: "sub".to_string(),
        message: "sub cannot be empty".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ResolveError::from(claim);

    assert!(matches!(
        error,
        ResolveError::InvalidIdentity { ref message, .. } if message == "sub: sub cannot be empty"
    ));
    assert_that!(error.error_code(), eq("INVALID_IDENTITY"));
    assert!(!error.is_retryable());
}
