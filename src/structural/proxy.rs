//! Proxy: a stand-in with the same surface as the real service, adding a
//! cache in front of slow remote lookups.
//!
//! This is the catalogue's one async demo: the "remote" service sleeps to
//! fake latency, and the proxy is awaited just like the real thing.

use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

const REMOTE_LATENCY: Duration = Duration::from_millis(40);

/// The real subject: authoritative but slow.
pub struct RemoteCatalog {
    prices: HashMap<&'static str, u32>,
}

impl RemoteCatalog {
    pub fn new() -> Self {
        Self {
            prices: HashMap::from([("widget", 250), ("gadget", 1_999), ("gizmo", 75)]),
        }
    }

    /// One full round trip to the backing store.
    pub async fn price_cents(&self, sku: &str) -> Option<u32> {
        sleep(REMOTE_LATENCY).await;
        self.prices.get(sku).copied()
    }
}

impl Default for RemoteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Same interface as [`RemoteCatalog`], but answers repeats from memory.
/// Misses are cached too, so a missing SKU costs one round trip, not many.
pub struct CachingCatalogProxy {
    remote: RemoteCatalog,
    cache: Mutex<HashMap<String, Option<u32>>>,
    hits: Mutex<usize>,
}

impl CachingCatalogProxy {
    pub fn new(remote: RemoteCatalog) -> Self {
        Self {
            remote,
            cache: Mutex::new(HashMap::new()),
            hits: Mutex::new(0),
        }
    }

    pub async fn price_cents(&self, sku: &str) -> Option<u32> {
        if let Some(cached) = self.cache.lock().unwrap().get(sku).copied() {
            *self.hits.lock().unwrap() += 1;
            return cached;
        }
        let fetched = self.remote.price_cents(sku).await;
        self.cache.lock().unwrap().insert(sku.to_string(), fetched);
        fetched
    }

    pub fn cache_hits(&self) -> usize {
        *self.hits.lock().unwrap()
    }
}

pub async fn demo() {
    let proxy = CachingCatalogProxy::new(RemoteCatalog::new());

    println!("first lookups go all the way to the remote catalog:");
    for sku in ["widget", "gadget", "unobtainium"] {
        match proxy.price_cents(sku).await {
            Some(cents) => println!("  {sku}: {cents} cents"),
            None => println!("  {sku}: not listed"),
        }
    }

    println!("a burst of repeat lookups is served from the proxy's cache:");
    let lookups = ["widget", "gadget", "widget", "unobtainium", "gizmo"];
    let prices = join_all(lookups.iter().map(|sku| proxy.price_cents(sku))).await;
    for (sku, price) in lookups.iter().zip(prices) {
        match price {
            Some(cents) => println!("  {sku}: {cents} cents"),
            None => println!("  {sku}: not listed"),
        }
    }
    println!("cache hits so far: {}", proxy.cache_hits());
}
