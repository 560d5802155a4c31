use crate::framework::{Caller, ClientError};
use crate::model::{
    CreateDatasetOpts, CreateZvolOpts, Dataset, DatasetCreate, DeleteDatasetOpts, UpdateDatasetOpts,
};
use crate::resource_client;

resource_client!(
    /// Client for datasets and zvols. Single lookups go through
    /// `pool.dataset.get_instance`, so a missing path is `Ok(None)`.
    Dataset
);

impl<C: Caller + ?Sized + 'static> DatasetClient<C> {
    pub async fn create(&self, create: &DatasetCreate) -> Result<Dataset, ClientError> {
        self.inner.create(create).await
    }

    pub async fn create_filesystem(&self, opts: CreateDatasetOpts) -> Result<Dataset, ClientError> {
        self.create(&DatasetCreate::Filesystem(opts)).await
    }

    pub async fn create_zvol(&self, opts: CreateZvolOpts) -> Result<Dataset, ClientError> {
        self.create(&DatasetCreate::Volume(opts)).await
    }

    pub async fn update(&self, id: &str, opts: &UpdateDatasetOpts) -> Result<Dataset, ClientError> {
        self.inner.update(id.to_string(), opts).await
    }

    pub async fn delete_with(&self, id: &str, opts: &DeleteDatasetOpts) -> Result<(), ClientError> {
        self.inner.delete_with(id.to_string(), opts).await
    }
}
