use crate::framework::wire::decode_value;
use crate::framework::{Caller, ClientError, Version};
use crate::model::SystemInfo;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for appliance-wide facts. Not a resource: no ids, no CRUD.
pub struct SystemClient<C: ?Sized> {
    caller: Arc<C>,
}

impl<C: ?Sized> Clone for SystemClient<C> {
    fn clone(&self) -> Self {
        Self {
            caller: Arc::clone(&self.caller),
        }
    }
}

impl<C: Caller + ?Sized> SystemClient<C> {
    pub fn new(caller: Arc<C>) -> Self {
        Self { caller }
    }

    #[instrument(skip(self))]
    pub async fn info(&self) -> Result<SystemInfo, ClientError> {
        debug!(method = "system.info", "Call");
        let response = self.caller.call("system.info", Value::Null).await?;
        decode_value(response, "system info")
    }

    /// Raw release string, e.g. `25.10.0` or `TrueNAS-SCALE-24.10.2`.
    pub async fn version_string(&self) -> Result<String, ClientError> {
        debug!(method = "system.version", "Call");
        let response = self.caller.call("system.version", Value::Null).await?;
        decode_value(response, "system version")
    }

    /// The appliance release as a comparable [`Version`].
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<Version, ClientError> {
        let raw = self.version_string().await?;
        let version = Version::parse(&raw)?;
        info!(%raw, %version, "Negotiated");
        Ok(version)
    }
}
