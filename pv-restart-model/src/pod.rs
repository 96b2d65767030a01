use super::*;

#[derive(Clone, Debug, Deserialize)]
pub struct Pod {
    pub metadata: NamespacedMeta,
    #[serde(default)]
    pub spec: Option<PodSpec>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub volumes: Option<Vec<PodVolume>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodVolume {
    pub name: String,
    #[serde(default)]
    pub persistent_volume_claim: Option<ClaimSource>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSource {
    pub claim_name: String,
}

impl ReadModel for Pod {
    const KIND: &'static str = "Pod";
}

impl Pod {
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }

    /// A pod opts out when it carries a non-empty value under `key`.
    pub fn is_opted_out(&self, key: &str) -> bool {
        self.annotation(key).is_some_and(|value| !value.is_empty())
    }

    /// Distinct claim names referenced by the pod's volumes, in ascending order.
    pub fn claim_names(&self) -> Vec<String> {
        self.spec
            .iter()
            .flat_map(|spec| spec.volumes.iter().flatten())
            .filter_map(|volume| volume.persistent_volume_claim.as_ref())
            .map(|source| source.claim_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
