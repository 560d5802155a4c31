use crate::framework::error::ClientError;
use crate::framework::params::{self, clear_zero, is_zero};
use crate::framework::wire::nullable;
use crate::framework::{Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A system container managed through `virt.instance`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub id: String,
    pub name: String,
    /// `RUNNING`, `STOPPED`, ...
    pub status: String,
    /// CPU set or count as configured; empty when unrestricted.
    pub cpu: String,
    /// Memory limit in bytes, zero when unrestricted.
    pub memory: i64,
    pub autostart: bool,
    pub image_os: String,
    pub image_release: String,
    pub environment: BTreeMap<String, String>,
}

/// Options for creating a container. The `instance_type` discriminant is
/// added on encode.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateContainerOpts {
    pub name: String,
    /// Image alias such as `ubuntu/24.04`.
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub cpu: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub memory: i64,
    pub autostart: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub environment: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContainerOpts {
    /// `Some("")` removes the CPU restriction.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub cpu: Option<String>,
    /// `Some(0)` removes the memory limit.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
}

/// Parameters for stop and restart.
#[derive(Debug, Clone, Serialize)]
pub struct StopContainerOpts {
    /// Seconds to wait for a clean shutdown; `-1` waits forever.
    pub timeout: i64,
    pub force: bool,
}

impl Default for StopContainerOpts {
    fn default() -> Self {
        Self {
            timeout: -1,
            force: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContainerWire {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    status: String,
    #[serde(default, deserialize_with = "nullable")]
    cpu: String,
    #[serde(default, deserialize_with = "nullable")]
    memory: i64,
    #[serde(default)]
    autostart: bool,
    #[serde(default, deserialize_with = "nullable")]
    image: ImageWire,
    #[serde(default, deserialize_with = "nullable")]
    environment: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageWire {
    #[serde(default, deserialize_with = "nullable")]
    os: String,
    #[serde(default, deserialize_with = "nullable")]
    release: String,
}

impl From<ContainerWire> for Container {
    fn from(wire: ContainerWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            status: wire.status,
            cpu: wire.cpu,
            memory: wire.memory,
            autostart: wire.autostart,
            image_os: wire.image.os,
            image_release: wire.image.release,
            environment: wire.environment,
        }
    }
}

impl Resource for Container {
    const KIND: &'static str = "container";
    const NAMESPACE: Namespace = Namespace::Fixed("virt.instance");
    type Id = String;
    type Wire = ContainerWire;
    type Create = CreateContainerOpts;

    fn from_wire(wire: ContainerWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn encode_create(opts: &CreateContainerOpts) -> Result<Value, ClientError> {
        params::tagged("instance_type", "CONTAINER", opts, "container create options")
    }
}

impl Updatable for Container {
    type Update = UpdateContainerOpts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_always_carries_instance_type() {
        let opts = CreateContainerOpts {
            name: "web".into(),
            image: "debian/12".into(),
            ..Default::default()
        };
        assert_eq!(
            Container::encode_create(&opts).unwrap(),
            json!({"name": "web", "image": "debian/12", "autostart": false, "instance_type": "CONTAINER"})
        );
    }

    #[test]
    fn test_decode_unrestricted_limits() {
        let wire: ContainerWire = serde_json::from_value(json!({
            "id": "web",
            "name": "web",
            "type": "CONTAINER",
            "status": "RUNNING",
            "cpu": null,
            "memory": null,
            "autostart": true,
            "image": {"os": "Debian", "release": "bookworm", "architecture": "amd64"},
            "environment": {}
        }))
        .unwrap();
        let container = Container::from_wire(wire);
        assert_eq!(container.cpu, "");
        assert_eq!(container.memory, 0);
        assert_eq!(container.image_release, "bookworm");
        assert!(container.autostart);
    }
}
