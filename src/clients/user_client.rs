use crate::framework::{Caller, ClientError};
use crate::model::{CreateUserOpts, DeleteUserOpts, UpdateUserOpts, User};
use crate::resource_client;
use tracing::{debug, instrument};

resource_client!(
    /// Client for local accounts.
    User
);

impl<C: Caller + ?Sized + 'static> UserClient<C> {
    pub async fn create(&self, opts: &CreateUserOpts) -> Result<User, ClientError> {
        self.inner.create(opts).await
    }

    pub async fn update(&self, id: i64, opts: &UpdateUserOpts) -> Result<User, ClientError> {
        self.inner.update(id, opts).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, ClientError> {
        debug!("Lookup");
        self.inner.get_by("username", username).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_uid(&self, uid: i64) -> Result<Option<User>, ClientError> {
        debug!("Lookup");
        self.inner.get_by("uid", uid).await
    }

    pub async fn delete_with(&self, id: i64, opts: &DeleteUserOpts) -> Result<(), ClientError> {
        self.inner.delete_with(id, opts).await
    }
}
