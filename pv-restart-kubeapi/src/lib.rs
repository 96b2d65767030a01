use std::fmt::Debug;
use std::future::Future;

use kube::api;
use pv_restart_ext as k8s;

use k8s::corev1;
use k8s::Query;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path} not found")]
    NotFound { path: String },

    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// The slice of the Kubernetes API pv-restart needs: raw reads and pod deletes.
pub trait ClusterApi {
    /// Issue `query` and return the raw JSON body.
    ///
    /// A missing object is reported as [`Error::NotFound`].
    fn get(&self, query: &Query) -> impl Future<Output = Result<String>> + Send;

    /// Delete a pod. A pod that is already gone counts as deleted.
    fn delete_pod(&self, namespace: &str, name: &str) -> impl Future<Output = Result<()>> + Send;
}

pub struct KubeApi {
    get_params: api::GetParams,
    list_params: api::ListParams,
    delete_params: api::DeleteParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client is inferred from the in-cluster environment or the local kubeconfig.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = pv_restart_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The returned KubeApi is initialized with default `GetParams`, `ListParams`
    /// and `DeleteParams`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let client = kube::Client::try_default().await?;
    /// let api = pv_restart_kubeapi::KubeApi::with_client(client);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            get_params: api::GetParams::default(),
            list_params: api::ListParams::default(),
            delete_params: api::DeleteParams::default(),
            client,
        }
    }

    /// Use `seconds` as the grace period of every pod delete.
    ///
    /// `None` leaves the pod's own `terminationGracePeriodSeconds` in charge.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = pv_restart_kubeapi::KubeApi::new().await?.grace_period(Some(30));
    /// # Ok(())
    /// # }
    /// ```
    pub fn grace_period(self, seconds: Option<u32>) -> Self {
        let delete_params = delete_params(seconds);
        Self {
            delete_params,
            ..self
        }
    }

    /// Fetches the raw response body for `query`.
    ///
    /// A query with a name reads that object, one without lists the whole
    /// collection.
    ///
    /// # Returns
    ///
    /// The response body as text; the `Err` variant carries the request or API
    /// error unchanged, including a `404` status for a missing object.
    async fn raw_get(&self, query: &Query) -> kube::Result<String> {
        let request = api::Request::new(query.collection_path());
        let request = match query.name() {
            Some(name) => request.get(name, self.get_params()),
            None => request.list(self.list_params()),
        }
        .map_err(kube::Error::BuildRequest)?;
        self.client.request_text(request).await
    }

    /// Get an Api handle scoped to the Pods of `namespace`.
    ///
    /// # Returns
    ///
    /// An `api::Api<corev1::Pod>` sharing this KubeApi's client.
    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    /// Accesses the GET query parameters used for single-object reads.
    ///
    /// # Returns
    ///
    /// A reference to the stored `api::GetParams`.
    fn get_params(&self) -> &api::GetParams {
        &self.get_params
    }

    /// Accesses the list query parameters used for collection reads.
    ///
    /// Returns a reference to the `api::ListParams` applied to list requests.
    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl ClusterApi for KubeApi {
    async fn get(&self, query: &Query) -> Result<String> {
        self.raw_get(query).await.map_err(|err| {
            if is_not_found(&err) {
                Error::NotFound {
                    path: query.path(),
                }
            } else {
                Error::Kube(err)
            }
        })
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        match self.pods(namespace).delete(name, &self.delete_params).await {
            Ok(_) => Ok(()),
            Err(err) if is_not_found(&err) => {
                tracing::debug!(namespace, name, "Pod already gone");
                Ok(())
            }
            Err(err) => Err(Error::Kube(err)),
        }
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("get_params", &self.get_params)
            .field("list_params", &self.list_params)
            .field("delete_params", &self.delete_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}

fn delete_params(grace_period_seconds: Option<u32>) -> api::DeleteParams {
    api::DeleteParams {
        grace_period_seconds,
        ..api::DeleteParams::default()
    }
}

/// Whether the API server answered with `404 Not Found`.
fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(status) if status.code == 404)
}
