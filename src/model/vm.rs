use crate::framework::params::{clear_zero, is_zero};
use crate::framework::wire::nullable;
use crate::framework::{Lookup, Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

/// A bhyve/KVM virtual machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vm {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub vcpus: i64,
    pub cores: i64,
    pub threads: i64,
    /// MiB.
    pub memory: i64,
    /// MiB, zero when ballooning is off.
    pub min_memory: i64,
    pub autostart: bool,
    pub bootloader: String,
    /// `RUNNING`, `STOPPED`, ...
    pub state: String,
    /// Zero when the VM is not running.
    pub pid: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVmOpts {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub vcpus: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub cores: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub threads: i64,
    /// MiB.
    pub memory: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_memory: i64,
    pub autostart: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub bootloader: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVmOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    /// `Some(0)` turns ballooning off.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub min_memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,
}

/// Modifiers for `vm.delete`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteVmOpts {
    /// Also destroy the zvols backing the VM's disks.
    pub zvols: bool,
    pub force: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StartVmOpts {
    /// Start even when the host cannot guarantee the memory.
    pub overcommit: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StopVmOpts {
    pub force: bool,
    /// Force off if the guest ignores the ACPI shutdown.
    pub force_after_timeout: bool,
}

#[derive(Debug, Deserialize)]
pub struct VmWire {
    id: i64,
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    description: String,
    #[serde(default)]
    vcpus: i64,
    #[serde(default)]
    cores: i64,
    #[serde(default)]
    threads: i64,
    #[serde(default)]
    memory: i64,
    #[serde(default, deserialize_with = "nullable")]
    min_memory: i64,
    #[serde(default)]
    autostart: bool,
    #[serde(default, deserialize_with = "nullable")]
    bootloader: String,
    #[serde(default, deserialize_with = "nullable")]
    status: VmStatusWire,
}

#[derive(Debug, Default, Deserialize)]
struct VmStatusWire {
    #[serde(default, deserialize_with = "nullable")]
    state: String,
    #[serde(default, deserialize_with = "nullable")]
    pid: i64,
}

impl From<VmWire> for Vm {
    fn from(wire: VmWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            vcpus: wire.vcpus,
            cores: wire.cores,
            threads: wire.threads,
            memory: wire.memory,
            min_memory: wire.min_memory,
            autostart: wire.autostart,
            bootloader: wire.bootloader,
            state: wire.status.state,
            pid: wire.status.pid,
        }
    }
}

impl Resource for Vm {
    const KIND: &'static str = "vm";
    const NAMESPACE: Namespace = Namespace::Fixed("vm");
    const LOOKUP: Lookup = Lookup::Direct;
    type Id = i64;
    type Wire = VmWire;
    type Create = CreateVmOpts;

    fn from_wire(wire: VmWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl Updatable for Vm {
    type Update = UpdateVmOpts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_stopped_vm() {
        let wire: VmWire = serde_json::from_value(json!({
            "id": 3,
            "name": "win11",
            "vcpus": 1,
            "cores": 4,
            "threads": 1,
            "memory": 8192,
            "min_memory": null,
            "autostart": false,
            "status": {"state": "STOPPED", "pid": null, "domain_state": "SHUTOFF"}
        }))
        .unwrap();
        let vm = Vm::from_wire(wire);
        assert_eq!(vm.state, "STOPPED");
        assert_eq!(vm.pid, 0);
        assert_eq!(vm.min_memory, 0);
    }

    #[test]
    fn test_memory_is_always_sent() {
        let opts = CreateVmOpts {
            name: "tiny".into(),
            ..Default::default()
        };
        assert_eq!(
            Vm::encode_create(&opts).unwrap(),
            json!({"name": "tiny", "memory": 0, "autostart": false})
        );
    }
}
