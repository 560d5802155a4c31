use crate::framework::params;
use crate::framework::{AsyncCaller, Caller, ClientError};
use crate::model::{CreateCronJobOpts, CronJob, UpdateCronJobOpts};
use crate::resource_client;

resource_client!(
    /// Client for scheduled commands.
    CronJob
);

impl<C: Caller + ?Sized + 'static> CronJobClient<C> {
    pub async fn create(&self, opts: &CreateCronJobOpts) -> Result<CronJob, ClientError> {
        self.inner.create(opts).await
    }

    pub async fn update(&self, id: i64, opts: &UpdateCronJobOpts) -> Result<CronJob, ClientError> {
        self.inner.update(id, opts).await
    }
}

impl<C: AsyncCaller + ?Sized + 'static> CronJobClient<C> {
    /// Runs the job now and waits for it to finish. With `skip_disabled`
    /// a disabled job is a no-op instead of running anyway.
    pub async fn run(&self, id: i64, skip_disabled: bool) -> Result<(), ClientError> {
        self.inner.invoke_job("run", params::pair(id, skip_disabled)).await
    }
}
