use super::*;

/// A pod that is eligible for matching.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub namespace: String,
    pub name: String,
    pub claims: Vec<String>,
}

impl Candidate {
    fn from_pod(pod: model::Pod) -> Self {
        let claims = pod.claim_names();
        let model::NamespacedMeta {
            name, namespace, ..
        } = pod.metadata;
        Self {
            namespace,
            name,
            claims,
        }
    }
}

/// Lists every pod in the cluster that references at least one claim.
///
/// With `opt_out_annotation` set, pods carrying a non-empty value under that
/// annotation are left out. The result is ordered by namespace, then name.
pub async fn list_pods<C: ClusterApi>(
    cache: &ObjectCache<C>,
    opt_out_annotation: Option<&str>,
) -> Result<Vec<Candidate>, Error> {
    let query = Query::all::<corev1::Pod>();
    let body = cache.fetch(&query).await.map_err(Error::ListPods)?;
    let pods = model::ItemList::<model::Pod>::decode(&body)?;

    let mut candidates = pods
        .into_iter()
        .filter(|pod| {
            let opted_out = opt_out_annotation.is_some_and(|key| pod.is_opted_out(key));
            if opted_out {
                tracing::debug!(
                    namespace = pod.namespace(),
                    pod = pod.name(),
                    "Pod opted out"
                );
            }
            !opted_out
        })
        .map(Candidate::from_pod)
        .filter(|candidate| !candidate.claims.is_empty())
        .collect::<Vec<_>>();
    candidates.sort();

    Ok(candidates)
}
