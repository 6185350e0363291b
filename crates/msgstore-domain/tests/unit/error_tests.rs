//! Unit tests for the error taxonomy

use msgstore_domain::error::Error;

#[test]
fn test_invalid_configuration_constructor() {
    let err = Error::invalid_configuration("writer capability is required");

    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert_eq!(
        err.to_string(),
        "invalid configuration: writer capability is required"
    );
}

#[test]
fn test_config_constructor_without_source() {
    let err = Error::config("storage root does not exist");

    assert!(matches!(err, Error::Config { source: None, .. }));
}

#[test]
fn test_io_error_from_std() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Error::from(io_err);

    assert!(matches!(err, Error::IoSimple { .. }));
}

#[test]
fn test_io_with_source_keeps_cause() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err = Error::io_with_source("failed to write message 3", io_err);

    assert!(matches!(err, Error::Io { source: Some(_), .. }));
    assert_eq!(err.to_string(), "I/O error: failed to write message 3");
}
