//! Integration tests for CertificateCache over the SQLite store.

mod common;

use certcache::domain::ports::CertificateStore;
use certcache::{CacheError, IndexState, RequestContext};

use common::{file_cache, row_count, setup_test_logging, sqlite_cache, temp_db_url};

#[tokio::test]
async fn test_round_trip_binary_payload() {
    setup_test_logging();
    let cache = sqlite_cache().await;
    let ctx = RequestContext::background();
    let payload: Vec<u8> = (0..=255).collect();

    cache.put(&ctx, "example.com", &payload).await.expect("put");

    assert_eq!(cache.get(&ctx, "example.com").await.expect("get"), payload);
}

#[tokio::test]
async fn test_update_overwrites_single_row() {
    let cache = sqlite_cache().await;
    let ctx = RequestContext::background();

    cache.put(&ctx, "example.com", b"first").await.unwrap();
    cache.put(&ctx, "example.com", b"second").await.unwrap();

    assert_eq!(cache.get(&ctx, "example.com").await.unwrap(), b"second");
    assert_eq!(row_count(&cache, "example.com").await, 1);

    let record = cache.store().find_by_key("example.com").await.unwrap().unwrap();
    assert_eq!(record.data, "c2Vjb25k");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let cache = sqlite_cache().await;
    let ctx = RequestContext::background();

    cache.put(&ctx, "example.com", b"cert").await.unwrap();
    cache.delete(&ctx, "example.com").await.unwrap();

    let err = cache.get(&ctx, "example.com").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(row_count(&cache, "example.com").await, 0);
}

#[tokio::test]
async fn test_delete_unknown_key_succeeds() {
    let cache = sqlite_cache().await;
    let ctx = RequestContext::background();

    cache.delete(&ctx, "never-stored").await.expect("delete should succeed");

    assert!(cache.get(&ctx, "never-stored").await.unwrap_err().is_not_found());
    assert_eq!(cache.cached_state("never-stored"), Some(IndexState::Absent));
}

#[tokio::test]
async fn test_corrupt_row_surfaces_error() {
    let cache = sqlite_cache().await;
    sqlx::query(
        "INSERT INTO certs (cert_key, data, created_at, updated_at) VALUES (?, ?, datetime('now'), datetime('now'))",
    )
    .bind("broken.example")
    .bind("not*base64")
    .execute(cache.store().pool())
    .await
    .unwrap();

    let result = cache.get(&RequestContext::background(), "broken.example").await;

    assert!(matches!(result, Err(CacheError::CorruptRecord { ref key, .. }) if key == "broken.example"));
}

#[tokio::test]
async fn test_replicas_share_the_store() {
    let (_dir, url) = temp_db_url();
    let first = file_cache(&url).await;
    let second = file_cache(&url).await;
    let ctx = RequestContext::background();

    first.put(&ctx, "example.com", b"v1").await.unwrap();
    assert_eq!(second.get(&ctx, "example.com").await.unwrap(), b"v1");

    // Each instance keeps its own index; the second one serves its copy.
    first.put(&ctx, "example.com", b"v2").await.unwrap();
    assert_eq!(first.get(&ctx, "example.com").await.unwrap(), b"v2");
    assert_eq!(second.get(&ctx, "example.com").await.unwrap(), b"v1");

    // A replica that never cached the key reads the latest row.
    let third = file_cache(&url).await;
    assert_eq!(third.get(&ctx, "example.com").await.unwrap(), b"v2");
}

#[tokio::test]
async fn test_reopening_database_keeps_records() {
    let (_dir, url) = temp_db_url();
    let ctx = RequestContext::background();

    {
        let cache = file_cache(&url).await;
        cache.put(&ctx, "example.com", b"persisted").await.unwrap();
        cache.store().pool().close().await;
    }

    let cache = file_cache(&url).await;
    assert_eq!(cache.index_len(), 0);
    assert_eq!(cache.get(&ctx, "example.com").await.unwrap(), b"persisted");
}
