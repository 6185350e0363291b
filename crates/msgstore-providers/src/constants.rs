//! Provider constants

/// File extension for persisted messages
pub const MESSAGE_FILE_EXTENSION: &str = "txt";
