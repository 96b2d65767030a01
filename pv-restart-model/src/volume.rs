use super::*;

/// A PersistentVolume reduced to its name and the raw `spec` mapping.
///
/// Storage types (`nfs`, `glusterfs`, `csi`, ...) are keys of `spec`, so the
/// mapping is kept untyped and looked up by key.
#[derive(Clone, Debug, Deserialize)]
pub struct Volume {
    pub metadata: ClusterMeta,
    #[serde(default)]
    pub spec: Map<String, Value>,
}

impl ReadModel for Volume {
    const KIND: &'static str = "PersistentVolume";
}

impl Volume {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// A type is present when its key exists with a value other than `null` or `false`.
    pub fn has_type(&self, storage_type: &str) -> bool {
        self.spec
            .get(storage_type)
            .is_some_and(|descriptor| descriptor.is_truthy())
    }

    pub fn has_any_type<'a>(&self, storage_types: impl IntoIterator<Item = &'a str>) -> bool {
        storage_types
            .into_iter()
            .any(|storage_type| self.has_type(storage_type))
    }
}
