//! Concurrent access to a single cache instance.

mod common;

use std::sync::Arc;
use tokio::task::JoinSet;

use certcache::domain::ports::CertificateStore;
use certcache::{CacheResult, CertificateCache, InMemoryCertificateStore, RequestContext};

const KEYS: usize = 64;

fn payload_for(i: usize, round: usize) -> Vec<u8> {
    format!("cert-{i}-round-{round}").into_bytes()
}

async fn put_twice<S: CertificateStore>(cache: Arc<CertificateCache<S>>, i: usize) -> CacheResult<()> {
    let ctx = RequestContext::background();
    let key = format!("host-{i}.example");
    cache.put(&ctx, &key, &payload_for(i, 0)).await?;
    cache.put(&ctx, &key, &payload_for(i, 1)).await
}

async fn read_repeatedly<S: CertificateStore>(cache: Arc<CertificateCache<S>>, i: usize) -> CacheResult<()> {
    let ctx = RequestContext::background();
    for _ in 0..16 {
        cache.get(&ctx, &format!("host-{i}")).await?;
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_puts_on_distinct_keys() {
    let cache = Arc::new(common::sqlite_cache().await);

    let mut tasks = JoinSet::new();
    for i in 0..KEYS {
        tasks.spawn(put_twice(Arc::clone(&cache), i));
    }
    while let Some(joined) = tasks.join_next().await {
        joined.expect("put task panicked").expect("put failed");
    }

    let ctx = RequestContext::background();
    for i in 0..KEYS {
        let key = format!("host-{i}.example");
        assert_eq!(cache.get(&ctx, &key).await.unwrap(), payload_for(i, 1));
        assert_eq!(common::row_count(&cache, &key).await, 1);
    }
    assert_eq!(cache.index_len(), KEYS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_and_writers() {
    let store = Arc::new(InMemoryCertificateStore::new());
    let cache = Arc::new(CertificateCache::new(Arc::clone(&store)).await.unwrap());
    let ctx = RequestContext::background();
    for i in 0..KEYS {
        cache
            .put(&ctx, &format!("host-{i}"), &payload_for(i, 0))
            .await
            .unwrap();
    }
    let finds_before = store.stats().finds();

    let mut tasks = JoinSet::new();
    for i in 0..KEYS {
        tasks.spawn(read_repeatedly(Arc::clone(&cache), i));

        let writer = Arc::clone(&cache);
        tasks.spawn(async move {
            let ctx = RequestContext::background();
            writer
                .put(&ctx, &format!("new-{i}"), &payload_for(i, 2))
                .await
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.expect("task panicked").expect("operation failed");
    }

    // Reads of cached keys never reached the store; only the puts did.
    assert_eq!(store.stats().finds() - finds_before, KEYS);
    assert_eq!(store.len().await, KEYS * 2);
    assert_eq!(cache.index_len(), KEYS * 2);
}
