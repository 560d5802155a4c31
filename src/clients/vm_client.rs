use crate::framework::params;
use crate::framework::{AsyncCaller, Caller, ClientError};
use crate::model::{CreateVmOpts, DeleteVmOpts, StartVmOpts, StopVmOpts, UpdateVmOpts, Vm};
use crate::resource_client;
use serde_json::Value;

resource_client!(
    /// Client for virtual machines.
    Vm
);

impl<C: Caller + ?Sized + 'static> VmClient<C> {
    pub async fn create(&self, opts: &CreateVmOpts) -> Result<Vm, ClientError> {
        self.inner.create(opts).await
    }

    pub async fn update(&self, id: i64, opts: &UpdateVmOpts) -> Result<Vm, ClientError> {
        self.inner.update(id, opts).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Vm>, ClientError> {
        self.inner.get_by("name", name).await
    }

    pub async fn delete_with(&self, id: i64, opts: &DeleteVmOpts) -> Result<(), ClientError> {
        self.inner.delete_with(id, opts).await
    }

    pub async fn start(&self, id: i64, opts: &StartVmOpts) -> Result<(), ClientError> {
        let opts = params::encode(opts, "vm start options")?;
        self.inner.invoke("start", params::pair(id, opts)).await
    }

    /// Hard power off, no guest shutdown.
    pub async fn poweroff(&self, id: i64) -> Result<(), ClientError> {
        self.inner.invoke("poweroff", Value::from(id)).await
    }
}

impl<C: AsyncCaller + ?Sized + 'static> VmClient<C> {
    pub async fn stop(&self, id: i64, opts: &StopVmOpts) -> Result<(), ClientError> {
        let opts = params::encode(opts, "vm stop options")?;
        self.inner.invoke_job("stop", params::pair(id, opts)).await
    }

    pub async fn restart(&self, id: i64) -> Result<(), ClientError> {
        self.inner.invoke_job("restart", Value::from(id)).await
    }
}
