use crate::framework::params::{self, Filter};
use crate::framework::{Caller, ClientError};
use crate::model::{
    CloneSnapshotOpts, CreateSnapshotOpts, DeleteSnapshotOpts, RollbackSnapshotOpts, Snapshot,
};
use crate::resource_client;
use serde_json::Value;
use tracing::instrument;

resource_client!(
    /// Client for ZFS snapshots. Method names follow the negotiated release
    /// (`zfs.snapshot.*` before 25.10, `pool.snapshot.*` from then on).
    Snapshot
);

impl<C: Caller + ?Sized + 'static> SnapshotClient<C> {
    pub async fn create(&self, opts: &CreateSnapshotOpts) -> Result<Snapshot, ClientError> {
        self.inner.create(opts).await
    }

    /// Snapshots of one dataset. Empty when it has none.
    #[instrument(skip(self))]
    pub async fn list_for_dataset(&self, dataset: &str) -> Result<Vec<Snapshot>, ClientError> {
        self.inner.query(&[Filter::eq("dataset", dataset)]).await
    }

    pub async fn delete_with(&self, id: &str, opts: &DeleteSnapshotOpts) -> Result<(), ClientError> {
        self.inner.delete_with(id.to_string(), opts).await
    }

    /// Places the default user hold on a snapshot.
    pub async fn hold(&self, id: &str) -> Result<(), ClientError> {
        self.inner.invoke("hold", Value::from(id)).await
    }

    pub async fn release(&self, id: &str) -> Result<(), ClientError> {
        self.inner.invoke("release", Value::from(id)).await
    }

    /// Clones a snapshot into a new dataset. Fetch the clone through
    /// [`DatasetClient`](crate::clients::DatasetClient) if needed.
    pub async fn clone_to(&self, opts: &CloneSnapshotOpts) -> Result<(), ClientError> {
        let params = params::encode(opts, "snapshot clone options")?;
        self.inner.invoke("clone", params).await
    }

    pub async fn rollback(&self, id: &str, opts: &RollbackSnapshotOpts) -> Result<(), ClientError> {
        let opts = params::encode(opts, "snapshot rollback options")?;
        self.inner.invoke("rollback", params::pair(id, opts)).await
    }
}
