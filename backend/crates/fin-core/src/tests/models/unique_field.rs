use crate::UniqueField;

use std::str::FromStr;

#[test]
fn test_unique_field_as_str() {
    assert_eq!(UniqueField::ExternalSubjectId.as_str(), "external_subject_id");
    assert_eq!(UniqueField::Email.as_str(), "email");
}

#[test]
fn test_unique_field_from_str() {
    assert_eq!(
        UniqueField::from_str("external_subject_id").unwrap(),
        UniqueField::ExternalSubjectId
    );
    assert_eq!(UniqueField::from_str("email").unwrap(), UniqueField::Email);
    assert!(UniqueField::from_str("display_name").is_err());
}
