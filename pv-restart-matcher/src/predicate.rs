use super::*;

/// Decides whether a pod is wanted under a [`FilterConfig`].
#[derive(Debug)]
pub struct Matcher<'a, C> {
    cache: &'a ObjectCache<C>,
    filter: &'a FilterConfig,
}

impl<'a, C: ClusterApi> Matcher<'a, C> {
    pub fn new(cache: &'a ObjectCache<C>, filter: &'a FilterConfig) -> Self {
        Self { cache, filter }
    }

    /// `true` as soon as one of `claims` is bound to a volume that passes
    /// both the name pattern and the storage types.
    ///
    /// Claims that cannot be resolved are skipped.
    pub async fn matches(&self, namespace: &str, pod: &str, claims: &[String]) -> Result<bool, Error> {
        for claim in claims {
            let volume = match resolve_volume(self.cache, namespace, claim).await {
                Ok(volume) => volume,
                Err(err) => {
                    tracing::debug!(namespace, pod, claim, %err, "Skipping claim");
                    continue;
                }
            };

            if !self.filter.name_matches(&volume) {
                continue;
            }

            let type_matches = match self.filter.storage_types() {
                Some(storage_types) => has_any_type(self.cache, &volume, storage_types).await?,
                None => true,
            };

            if type_matches {
                tracing::debug!(namespace, pod, claim, volume, "Volume matched");
                return Ok(true);
            }
        }

        Ok(false)
    }
}
