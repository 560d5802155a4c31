use crate::framework::{Caller, ClientError};
use crate::model::{CreateGroupOpts, DeleteGroupOpts, Group, UpdateGroupOpts};
use crate::resource_client;

resource_client!(
    /// Client for local groups.
    Group
);

impl<C: Caller + ?Sized + 'static> GroupClient<C> {
    pub async fn create(&self, opts: &CreateGroupOpts) -> Result<Group, ClientError> {
        self.inner.create(opts).await
    }

    pub async fn update(&self, id: i64, opts: &UpdateGroupOpts) -> Result<Group, ClientError> {
        self.inner.update(id, opts).await
    }

    /// The wire field for a group's name is `group`.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Group>, ClientError> {
        self.inner.get_by("group", name).await
    }

    pub async fn get_by_gid(&self, gid: i64) -> Result<Option<Group>, ClientError> {
        self.inner.get_by("gid", gid).await
    }

    pub async fn delete_with(&self, id: i64, opts: &DeleteGroupOpts) -> Result<(), ClientError> {
        self.inner.delete_with(id, opts).await
    }
}
