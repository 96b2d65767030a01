pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub use query::Query;
pub use query::CORE_API_ROOT;
pub use value::ValueExt;

use openapi::Resource;

mod query;
mod value;

/// Well-known annotation that opts a pod out of restarts.
pub const SKIP_ANNOTATION: &str = "pv-restart.io/skip";

/// Builders for the objects test fixtures serve, behind the `testing` feature.
#[cfg(any(test, feature = "testing"))]
pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn annotated(self, key: impl ToString, value: impl ToString) -> Self;
}

#[cfg(any(test, feature = "testing"))]
impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn annotated(self, key: impl ToString, value: impl ToString) -> Self {
        let mut annotations = self.annotations.unwrap_or_default();
        annotations.insert(key.to_string(), value.to_string());
        Self {
            annotations: Some(annotations),
            ..self
        }
    }
}

#[cfg(any(test, feature = "testing"))]
pub trait PodExt {
    fn with_claims<I, S>(metadata: metav1::ObjectMeta, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString;
}

#[cfg(any(test, feature = "testing"))]
impl PodExt for corev1::Pod {
    /// Build a pod whose volumes reference the given claims, one volume per claim.
    fn with_claims<I, S>(metadata: metav1::ObjectMeta, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let volumes = claims
            .into_iter()
            .enumerate()
            .map(|(idx, claim)| corev1::Volume {
                name: format!("volume-{idx}"),
                persistent_volume_claim: Some(corev1::PersistentVolumeClaimVolumeSource {
                    claim_name: claim.to_string(),
                    read_only: None,
                }),
                ..default()
            })
            .collect();
        let spec = corev1::PodSpec {
            volumes: Some(volumes),
            ..default()
        };
        Self {
            metadata,
            spec: Some(spec),
            ..default()
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
