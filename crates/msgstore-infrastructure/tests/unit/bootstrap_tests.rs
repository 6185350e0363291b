//! Unit tests for the composition root

use msgstore_domain::error::Error;
use msgstore_domain::value_objects::{Maybe, MessageId};
use msgstore_infrastructure::bootstrap::build_message_store;
use msgstore_infrastructure::config::AppConfig;
use tempfile::TempDir;

fn config_rooted_at(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.root_dir = dir.path().to_path_buf();
    config
}

#[tokio::test]
async fn test_bootstrap_builds_working_chain() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = build_message_store(&config_rooted_at(&dir)).expect("bootstrap should succeed");

    let id = MessageId::new(10);
    store.save(id, "through the chain").await.expect("save should succeed");

    assert_eq!(
        store.read(id).await.expect("read should succeed"),
        Maybe::of("through the chain".to_string())
    );
}

#[tokio::test]
async fn test_bootstrap_locate_bypasses_decorators() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = build_message_store(&config_rooted_at(&dir)).expect("bootstrap should succeed");

    let location = store.locate(MessageId::new(11));

    assert_eq!(location.as_path(), dir.path().join("11.txt"));
}

#[tokio::test]
async fn test_bootstrap_without_cache_still_round_trips() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut config = config_rooted_at(&dir);
    config.cache.enabled = false;

    let store = build_message_store(&config).expect("bootstrap should succeed");

    let id = MessageId::new(12);
    store.save(id, "uncached").await.expect("save should succeed");
    assert_eq!(
        store.read(id).await.expect("read should succeed"),
        Maybe::of("uncached".to_string())
    );

    // Without the caching layer an out-of-band file change is visible.
    std::fs::write(store.locate(id).as_path(), "changed on disk").expect("direct write");
    assert_eq!(
        store.read(id).await.expect("read should succeed"),
        Maybe::of("changed on disk".to_string())
    );
}

#[test]
fn test_bootstrap_rejects_missing_storage_root() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut config = AppConfig::default();
    config.storage.root_dir = dir.path().join("never-created");

    let err = build_message_store(&config).expect_err("missing root should be rejected");

    assert!(matches!(err, Error::Config { .. }));
}
