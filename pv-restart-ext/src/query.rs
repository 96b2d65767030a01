use std::borrow::Cow;
use std::fmt;

use constcat::concat;

use super::*;

/// Root of the core (legacy, group-less) API, shared by pods, claims and volumes.
pub const CORE_API_ROOT: &str = concat!("/api/", corev1::Pod::VERSION);

/// A read against the API server, identified by resource kind, namespace and name.
///
/// The rendered request path is the query's identity: two queries with the
/// same path read the same object in the same (JSON) representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    group: &'static str,
    version: &'static str,
    plural: &'static str,
    namespace: Option<String>,
    name: Option<String>,
}

impl Query {
    /// All objects of kind `K` across every namespace.
    pub fn all<K: Resource>() -> Self {
        Self::new::<K>(None, None)
    }

    /// A single namespaced object.
    pub fn namespaced<K: Resource>(namespace: impl ToString, name: impl ToString) -> Self {
        Self::new::<K>(Some(namespace.to_string()), Some(name.to_string()))
    }

    /// A single cluster-scoped object.
    pub fn cluster<K: Resource>(name: impl ToString) -> Self {
        Self::new::<K>(None, Some(name.to_string()))
    }

    fn new<K: Resource>(namespace: Option<String>, name: Option<String>) -> Self {
        Self {
            group: K::GROUP,
            version: K::VERSION,
            plural: K::URL_PATH_SEGMENT,
            namespace,
            name,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Request path relative to the API server root.
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Path of the collection the queried object lives in.
    pub fn collection_path(&self) -> String {
        let root: Cow<'_, str> = if self.group.is_empty() {
            Cow::Borrowed(CORE_API_ROOT)
        } else {
            Cow::Owned(format!("/apis/{}/{}", self.group, self.version))
        };
        match &self.namespace {
            Some(namespace) => format!("{root}/namespaces/{namespace}/{}", self.plural),
            None => format!("{root}/{}", self.plural),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.collection_path())?;
        if let Some(name) = &self.name {
            write!(f, "/{name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pods() {
        let query = Query::all::<corev1::Pod>();
        assert_eq!(query.path(), "/api/v1/pods");
        assert!(query.path().starts_with(CORE_API_ROOT));
    }

    #[test]
    fn namespaced_claim() {
        let query = Query::namespaced::<corev1::PersistentVolumeClaim>("shop", "data-web-0");
        assert_eq!(
            query.path(),
            "/api/v1/namespaces/shop/persistentvolumeclaims/data-web-0"
        );
        assert_eq!(query.namespace(), Some("shop"));
        assert_eq!(query.name(), Some("data-web-0"));
    }

    #[test]
    fn cluster_scoped_volume() {
        let query = Query::cluster::<corev1::PersistentVolume>("pv-0001");
        assert_eq!(query.path(), "/api/v1/persistentvolumes/pv-0001");
        assert!(query.namespace().is_none());
        assert_eq!(query.collection_path(), "/api/v1/persistentvolumes");
    }

    #[test]
    fn core_kinds_share_the_core_root() {
        let pods = Query::all::<corev1::Pod>();
        let claim = Query::namespaced::<corev1::PersistentVolumeClaim>("shop", "data");
        let volume = Query::cluster::<corev1::PersistentVolume>("pv-0001");

        for query in [pods, claim, volume] {
            assert!(query.collection_path().starts_with(CORE_API_ROOT));
        }
    }

    #[test]
    fn grouped_kind_uses_apis_root() {
        let query = Query::namespaced::<openapi::api::apps::v1::Deployment>("shop", "web");
        assert_eq!(query.path(), "/apis/apps/v1/namespaces/shop/deployments/web");
    }

    #[test]
    fn same_object_same_query() {
        let a = Query::namespaced::<corev1::PersistentVolumeClaim>("shop", "data");
        let b = Query::namespaced::<corev1::PersistentVolumeClaim>("shop", "data");
        let c = Query::namespaced::<corev1::PersistentVolumeClaim>("shop2", "data");
        assert_eq!(a, b);
        assert_ne!(a.path(), c.path());
    }
}
