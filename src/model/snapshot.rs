use crate::framework::params::is_zero;
use crate::framework::wire::{hold_flag, nullable, parsed_of, Property};
use crate::framework::{Namespace, Resource, Version, VersionGate};
use serde::{Deserialize, Serialize};

/// Snapshot methods moved from `zfs.snapshot.*` to `pool.snapshot.*` in 25.10.
pub const SNAPSHOT_GATE: VersionGate =
    VersionGate::new(Version::new(25, 10), "zfs.snapshot", "pool.snapshot");

fn snapshot_prefix(version: Version) -> &'static str {
    SNAPSHOT_GATE.prefix(version)
}

/// A ZFS snapshot, keyed by `dataset@name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub id: String,
    /// The part after `@`.
    pub name: String,
    pub dataset: String,
    pub pool: String,
    pub used: i64,
    pub referenced: i64,
    /// Creation time in milliseconds since the epoch.
    pub created_at_ms: i64,
    /// True while at least one user hold pins the snapshot.
    pub has_hold: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSnapshotOpts {
    pub dataset: String,
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub recursive: bool,
}

/// Modifiers for snapshot deletion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteSnapshotOpts {
    /// Destroy once the last hold or clone goes away instead of failing.
    pub defer: bool,
    pub recursive: bool,
}

/// Clone a snapshot into a new dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CloneSnapshotOpts {
    pub snapshot: String,
    pub dataset_dst: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RollbackSnapshotOpts {
    /// Unmount the dataset if it is busy.
    pub force: bool,
    /// Destroy newer snapshots.
    pub recursive: bool,
    /// Destroy newer snapshots and their clones.
    pub recursive_clones: bool,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotWire {
    id: String,
    #[serde(default, deserialize_with = "nullable")]
    snapshot_name: String,
    #[serde(default, deserialize_with = "nullable")]
    dataset: String,
    #[serde(default, deserialize_with = "nullable")]
    pool: String,
    #[serde(default, deserialize_with = "nullable")]
    properties: SnapshotProperties,
}

#[derive(Debug, Default, Deserialize)]
struct SnapshotProperties {
    #[serde(default)]
    used: Option<Property<i64>>,
    #[serde(default)]
    referenced: Option<Property<i64>>,
    #[serde(default)]
    creation: Option<Property<Timestamp>>,
    #[serde(default)]
    userrefs: Option<Property<String>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct Timestamp {
    #[serde(rename = "$date")]
    millis: i64,
}

impl From<SnapshotWire> for Snapshot {
    fn from(wire: SnapshotWire) -> Self {
        let props = wire.properties;
        Self {
            id: wire.id,
            name: wire.snapshot_name,
            dataset: wire.dataset,
            pool: wire.pool,
            used: parsed_of(props.used),
            referenced: parsed_of(props.referenced),
            created_at_ms: parsed_of(props.creation).millis,
            has_hold: hold_flag(&parsed_of(props.userrefs)),
        }
    }
}

impl Resource for Snapshot {
    const KIND: &'static str = "snapshot";
    const NAMESPACE: Namespace = Namespace::Versioned(snapshot_prefix);
    type Id = String;
    type Wire = SnapshotWire;
    type Create = CreateSnapshotOpts;

    fn from_wire(wire: SnapshotWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &String {
        &self.id
    }
}
