//! Unit tests for message identity and addressing value objects

use msgstore_domain::value_objects::{Location, MessageId};
use std::path::{Path, PathBuf};

#[test]
fn test_message_id_value() {
    let id = MessageId::new(44);

    assert_eq!(id.value(), 44);
    assert_eq!(MessageId::from(44), id);
}

#[test]
fn test_message_id_display() {
    assert_eq!(MessageId::new(7).to_string(), "7");
}

#[test]
fn test_message_id_serialization() {
    let id = MessageId::new(99);
    let json = serde_json::to_string(&id).expect("serialization should succeed");
    let deserialized: MessageId =
        serde_json::from_str(&json).expect("deserialization should succeed");

    assert_eq!(id, deserialized);
}

#[test]
fn test_location_wraps_path() {
    let location = Location::new("/var/messages/44.txt");

    assert_eq!(location.as_path(), Path::new("/var/messages/44.txt"));
    assert_eq!(location, Location::from(PathBuf::from("/var/messages/44.txt")));
}

#[test]
fn test_location_display_uses_path() {
    let location = Location::new("messages/5.txt");

    assert_eq!(location.to_string(), "messages/5.txt");
}
