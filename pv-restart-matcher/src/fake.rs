use std::collections::BTreeMap;
use std::sync::Mutex as StdMutex;

use serde_json::json;
use serde_json::Value;

use k8s::metav1;
use k8s::ObjectMetaExt as _;
use k8s::PodExt as _;

use super::*;

/// An in-memory cluster that serves JSON bodies by request path.
#[derive(Debug, Default)]
pub(crate) struct FakeCluster {
    pods: Vec<Value>,
    objects: BTreeMap<String, Value>,
    failing: BTreeSet<String>,
    failing_deletes: BTreeSet<(String, String)>,
    gone: BTreeSet<(String, String)>,
    reads: StdMutex<BTreeMap<String, usize>>,
    deletes: StdMutex<Vec<(String, String)>>,
}

impl FakeCluster {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pod(self, namespace: &str, name: &str, claims: &[&str]) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace);
        self.openapi_pod(corev1::Pod::with_claims(metadata, claims))
    }

    pub(crate) fn annotated_pod(
        self,
        namespace: &str,
        name: &str,
        annotation: (&str, &str),
        claims: &[&str],
    ) -> Self {
        let (key, value) = annotation;
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace).annotated(key, value);
        self.openapi_pod(corev1::Pod::with_claims(metadata, claims))
    }

    fn openapi_pod(mut self, pod: corev1::Pod) -> Self {
        let pod = serde_json::to_value(&pod).expect("pod serializes");
        self.pods.push(pod);
        self
    }

    pub(crate) fn claim(mut self, namespace: &str, name: &str, volume: Option<&str>) -> Self {
        let query = Query::namespaced::<corev1::PersistentVolumeClaim>(namespace, name);
        let mut spec = json!({"accessModes": ["ReadWriteOnce"]});
        if let Some(volume) = volume {
            spec["volumeName"] = json!(volume);
        }
        let claim = json!({
            "apiVersion": "v1",
            "kind": "PersistentVolumeClaim",
            "metadata": {"name": name, "namespace": namespace},
            "spec": spec,
        });
        self.objects.insert(query.path(), claim);
        self
    }

    pub(crate) fn volume(mut self, name: &str, storage_types: &[&str]) -> Self {
        let query = Query::cluster::<corev1::PersistentVolume>(name);
        let mut spec = json!({"capacity": {"storage": "1Gi"}});
        for storage_type in storage_types {
            spec[*storage_type] = json!({"path": format!("/{name}")});
        }
        let volume = json!({
            "apiVersion": "v1",
            "kind": "PersistentVolume",
            "metadata": {"name": name},
            "spec": spec,
        });
        self.objects.insert(query.path(), volume);
        self
    }

    /// Reads of `path` fail with a transport-level error.
    pub(crate) fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub(crate) fn failing_delete(mut self, namespace: &str, name: &str) -> Self {
        self.failing_deletes
            .insert((namespace.to_string(), name.to_string()));
        self
    }

    /// Deletes of the pod report it as already gone.
    pub(crate) fn gone_pod(mut self, namespace: &str, name: &str) -> Self {
        self.gone.insert((namespace.to_string(), name.to_string()));
        self
    }

    pub(crate) fn reads(&self, path: &str) -> usize {
        self.reads
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().values().sum()
    }

    pub(crate) fn deletes(&self) -> Vec<(String, String)> {
        self.deletes.lock().unwrap().clone()
    }

    fn transient_error() -> kubeapi::Error {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        kubeapi::Error::Kube(kube::Error::SerdeError(err))
    }
}

impl ClusterApi for FakeCluster {
    async fn get(&self, query: &Query) -> kubeapi::Result<String> {
        let path = query.path();
        *self.reads.lock().unwrap().entry(path.clone()).or_default() += 1;

        if self.failing.contains(&path) {
            return Err(Self::transient_error());
        }
        if path == Query::all::<corev1::Pod>().path() {
            let list = json!({"apiVersion": "v1", "kind": "PodList", "items": self.pods});
            return Ok(list.to_string());
        }
        self.objects
            .get(&path)
            .map(Value::to_string)
            .ok_or(kubeapi::Error::NotFound { path })
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> kubeapi::Result<()> {
        let pod = (namespace.to_string(), name.to_string());
        if self.failing_deletes.contains(&pod) {
            return Err(Self::transient_error());
        }
        if self.gone.contains(&pod) {
            let path = Query::namespaced::<corev1::Pod>(namespace, name).path();
            return Err(kubeapi::Error::NotFound { path });
        }
        self.deletes.lock().unwrap().push(pod);
        Ok(())
    }
}
