use crate::framework::params;
use crate::framework::{AsyncCaller, Caller, ClientError};
use crate::model::{Container, CreateContainerOpts, StopContainerOpts, UpdateContainerOpts};
use crate::resource_client;
use serde_json::Value;

resource_client!(
    /// Client for system containers. Creation and power operations run as
    /// appliance jobs and need an [`AsyncCaller`].
    Container
);

impl<C: Caller + ?Sized + 'static> ContainerClient<C> {
    pub async fn update(&self, id: &str, opts: &UpdateContainerOpts) -> Result<Container, ClientError> {
        self.inner.update(id.to_string(), opts).await
    }
}

impl<C: AsyncCaller + ?Sized + 'static> ContainerClient<C> {
    pub async fn create(&self, opts: &CreateContainerOpts) -> Result<Container, ClientError> {
        self.inner.create_via_job(opts).await
    }

    pub async fn start(&self, id: &str) -> Result<(), ClientError> {
        self.inner.invoke_job("start", Value::from(id)).await
    }

    pub async fn stop(&self, id: &str, opts: &StopContainerOpts) -> Result<(), ClientError> {
        let opts = params::encode(opts, "container stop options")?;
        self.inner.invoke_job("stop", params::pair(id, opts)).await
    }

    pub async fn restart(&self, id: &str, opts: &StopContainerOpts) -> Result<(), ClientError> {
        let opts = params::encode(opts, "container restart options")?;
        self.inner.invoke_job("restart", params::pair(id, opts)).await
    }
}
