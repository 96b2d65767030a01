use super::*;

#[derive(Clone, Debug, Deserialize)]
pub struct Claim {
    pub metadata: NamespacedMeta,
    pub spec: ClaimSpec,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSpec {
    #[serde(default)]
    pub volume_name: Option<String>,
}

impl ReadModel for Claim {
    const KIND: &'static str = "PersistentVolumeClaim";
}

impl Claim {
    /// Name of the bound volume, `None` while the claim is unbound.
    pub fn volume_name(&self) -> Option<&str> {
        self.spec
            .volume_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}
