use super::*;

/// Memoizes cluster reads for the lifetime of one run.
///
/// Entries are keyed by the request path of the [`Query`] and hold the raw
/// response body. An entry is written once, after a successful read, and is
/// never refreshed; failed reads are not stored. The entries go away with
/// the cache.
#[derive(Debug)]
pub struct ObjectCache<C> {
    api: C,
    entries: Mutex<HashMap<String, Arc<str>>>,
}

impl<C: ClusterApi> ObjectCache<C> {
    pub fn new(api: C) -> Self {
        let entries = Mutex::new(HashMap::new());
        Self { api, entries }
    }

    /// Returns the body for `query`, reading it from the cluster only the first time.
    pub async fn fetch(&self, query: &Query) -> kubeapi::Result<Arc<str>> {
        let path = query.path();
        // Held across the read so a key is never fetched twice.
        let mut entries = self.entries.lock().await;
        if let Some(body) = entries.get(&path) {
            tracing::trace!(path, "Cache hit");
            return Ok(Arc::clone(body));
        }

        tracing::debug!(path, "Cache miss");
        let body = Arc::<str>::from(self.api.get(query).await?);
        entries.insert(path, Arc::clone(&body));
        Ok(body)
    }

    /// The API the cache reads through. Writes go here directly.
    pub fn api(&self) -> &C {
        &self.api
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
