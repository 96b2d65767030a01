//! Read models for the cluster objects pv-restart inspects.
//!
//! Each model carries only the fields the matcher needs. Fields the API
//! server always sets (names, the pod namespace, the claim spec) are required,
//! so a malformed body fails to decode instead of reading as empty.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use pv_restart_ext as k8s;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;

use k8s::ValueExt as _;

pub use claim::Claim;
pub use claim::ClaimSpec;
pub use list::ItemList;
pub use pod::ClaimSource;
pub use pod::Pod;
pub use pod::PodSpec;
pub use pod::PodVolume;
pub use volume::Volume;

mod claim;
mod list;
mod pod;
mod volume;

#[derive(Debug, thiserror::Error)]
#[error("failed to decode {kind}: {source}")]
pub struct DecodeError {
    kind: &'static str,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

/// A model decoded from the raw JSON body returned by the API server.
pub trait ReadModel: DeserializeOwned {
    const KIND: &'static str;

    fn decode(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(|source| DecodeError {
            kind: Self::KIND,
            source,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamespacedMeta {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClusterMeta {
    pub name: String,
}
