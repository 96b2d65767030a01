//! Storage-based pod selection.
//!
//! Pods are enumerated cluster-wide, each pod's claims are resolved to their
//! bound volumes, and a pod matches when any one of its volumes satisfies the
//! configured name pattern and storage types. Every read goes through a
//! per-run [`ObjectCache`].

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;

use pv_restart_ext as k8s;
use pv_restart_kubeapi as kubeapi;
use pv_restart_model as model;
use regex::Regex;
use tokio::sync::Mutex;

use k8s::corev1;
use k8s::Query;
use kubeapi::ClusterApi;
use model::DecodeError;
use model::ReadModel as _;

pub use cache::ObjectCache;
pub use classify::has_any_type;
pub use enumerate::list_pods;
pub use enumerate::Candidate;
pub use filter::ConfigError;
pub use filter::FilterConfig;
pub use predicate::Matcher;
pub use resolve::resolve_volume;
pub use resolve::ResolveError;
pub use restart::Report;
pub use restart::Restarter;

mod cache;
mod classify;
mod enumerate;
mod filter;
mod predicate;
mod resolve;
mod restart;

#[cfg(test)]
mod fake;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to list pods: {0}")]
    ListPods(#[source] kubeapi::Error),

    #[error("failed to read volume {volume}: {source}")]
    ReadVolume {
        volume: String,
        #[source]
        source: kubeapi::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to delete pod {namespace}/{name}: {source}")]
    Delete {
        namespace: String,
        name: String,
        #[source]
        source: kubeapi::Error,
    },
}
