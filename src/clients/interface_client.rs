use crate::framework::params;
use crate::framework::{Caller, ClientError};
use crate::model::{CommitOpts, Interface, InterfaceCreate, UpdateInterfaceOpts};
use crate::resource_client;
use serde_json::Value;

resource_client!(
    /// Client for network interfaces.
    ///
    /// Changes are staged: `create`/`update`/`delete` edit the pending
    /// configuration, [`commit`](InterfaceClient::commit) applies it and
    /// [`checkin`](InterfaceClient::checkin) makes it permanent before the
    /// automatic rollback fires.
    Interface
);

impl<C: Caller + ?Sized + 'static> InterfaceClient<C> {
    pub async fn create(&self, create: &InterfaceCreate) -> Result<Interface, ClientError> {
        self.inner.create(create).await
    }

    pub async fn update(&self, id: &str, opts: &UpdateInterfaceOpts) -> Result<Interface, ClientError> {
        self.inner.update(id.to_string(), opts).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Interface>, ClientError> {
        self.inner.get_by("name", name).await
    }

    pub async fn commit(&self, opts: &CommitOpts) -> Result<(), ClientError> {
        let params = params::encode(opts, "interface commit options")?;
        self.inner.invoke("commit", params).await
    }

    pub async fn checkin(&self) -> Result<(), ClientError> {
        self.inner.invoke("checkin", Value::Null).await
    }

    /// Discards pending changes.
    pub async fn rollback(&self) -> Result<(), ClientError> {
        self.inner.invoke("rollback", Value::Null).await
    }
}
