use crate::clients::{
    ContainerClient, CronJobClient, DatasetClient, GroupClient, InterfaceClient, SnapshotClient,
    SystemClient, UserClient, VmClient,
};
use crate::framework::{Caller, ClientError, ResourceClient, Version};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Settings for building an [`Appliance`].
///
/// Deserializable so it can sit inside an application's own config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplianceConfig {
    /// Pin the appliance release (e.g. `"25.04"`) instead of asking
    /// `system.version` on connect.
    pub version: Option<String>,
}

/// Entry point: every typed client wired onto one shared caller.
///
/// `Appliance` is responsible for:
/// - **Version negotiation**: one `system.version` call, parsed once
/// - **Client wiring**: each client shares the same `Arc<C>` and [`Version`]
///
/// Clients hold no other state. Clone them freely and use them from as many
/// tasks as needed; concurrency limits belong to the caller implementation.
///
/// # Example
///
/// ```ignore
/// let appliance = Appliance::connect(Arc::new(transport)).await?;
///
/// let snap = appliance.snapshots.create(&CreateSnapshotOpts {
///     dataset: "tank/media".into(),
///     name: "before-upgrade".into(),
///     ..Default::default()
/// }).await?;
/// appliance.snapshots.hold(&snap.id).await?;
/// ```
pub struct Appliance<C: ?Sized> {
    caller: Arc<C>,
    version: Version,

    pub users: UserClient<C>,
    pub groups: GroupClient<C>,
    pub datasets: DatasetClient<C>,
    pub snapshots: SnapshotClient<C>,
    pub interfaces: InterfaceClient<C>,
    pub containers: ContainerClient<C>,
    pub vms: VmClient<C>,
    pub cron_jobs: CronJobClient<C>,
    pub system: SystemClient<C>,
}

impl<C: ?Sized> Clone for Appliance<C> {
    fn clone(&self) -> Self {
        Self {
            caller: Arc::clone(&self.caller),
            version: self.version,
            users: self.users.clone(),
            groups: self.groups.clone(),
            datasets: self.datasets.clone(),
            snapshots: self.snapshots.clone(),
            interfaces: self.interfaces.clone(),
            containers: self.containers.clone(),
            vms: self.vms.clone(),
            cron_jobs: self.cron_jobs.clone(),
            system: self.system.clone(),
        }
    }
}

impl<C: Caller + ?Sized + 'static> Appliance<C> {
    /// Asks the appliance for its release, then builds every client for it.
    #[instrument(skip(caller))]
    pub async fn connect(caller: Arc<C>) -> Result<Self, ClientError> {
        let version = SystemClient::new(Arc::clone(&caller)).version().await?;
        Ok(Self::with_version(caller, version))
    }

    /// Builds every client for a known release without any remote call.
    pub fn with_version(caller: Arc<C>, version: Version) -> Self {
        info!(%version, "Wiring clients");
        Self {
            users: UserClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            groups: GroupClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            datasets: DatasetClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            snapshots: SnapshotClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            interfaces: InterfaceClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            containers: ContainerClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            vms: VmClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            cron_jobs: CronJobClient::new(ResourceClient::new(Arc::clone(&caller), version)),
            system: SystemClient::new(Arc::clone(&caller)),
            caller,
            version,
        }
    }

    /// Uses the pinned version from `config` if there is one, otherwise
    /// negotiates like [`connect`](Self::connect).
    pub async fn from_config(caller: Arc<C>, config: &ApplianceConfig) -> Result<Self, ClientError> {
        match &config.version {
            Some(pinned) => Ok(Self::with_version(caller, Version::parse(pinned)?)),
            None => Self::connect(caller).await,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn caller(&self) -> &Arc<C> {
        &self.caller
    }
}
