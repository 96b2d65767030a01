use super::*;

/// Why a claim could not be resolved to a volume.
///
/// All of these make the claim irrelevant to matching.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("claim {namespace}/{claim} not found")]
    NotFound { namespace: String, claim: String },

    #[error("claim {namespace}/{claim} is not bound")]
    NotBound { namespace: String, claim: String },

    #[error(transparent)]
    Api(kubeapi::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Name of the volume bound to `claim` in `namespace`.
pub async fn resolve_volume<C: ClusterApi>(
    cache: &ObjectCache<C>,
    namespace: &str,
    claim: &str,
) -> Result<String, ResolveError> {
    let query = Query::namespaced::<corev1::PersistentVolumeClaim>(namespace, claim);
    let body = cache.fetch(&query).await.map_err(|err| {
        if err.is_not_found() {
            ResolveError::NotFound {
                namespace: namespace.to_string(),
                claim: claim.to_string(),
            }
        } else {
            ResolveError::Api(err)
        }
    })?;

    model::Claim::decode(&body)?
        .volume_name()
        .map(ToString::to_string)
        .ok_or_else(|| ResolveError::NotBound {
            namespace: namespace.to_string(),
            claim: claim.to_string(),
        })
}
