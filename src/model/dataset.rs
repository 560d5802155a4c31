use crate::framework::params::{clear_zero, is_zero};
use crate::framework::wire::{nullable, parsed_of, text_of, Property};
use crate::framework::{Lookup, Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

/// Whether a dataset is a filesystem or a block volume (zvol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatasetType {
    #[default]
    Filesystem,
    Volume,
}

/// A ZFS dataset or zvol, keyed by its full path (`tank/media`).
///
/// Property-valued fields are flattened: sizes take the parsed numeric form,
/// textual settings (`compression`, `atime`, ...) take the display string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub pool: String,
    pub kind: DatasetType,
    pub mountpoint: String,
    pub comments: String,
    pub compression: String,
    pub atime: String,
    pub readonly: String,
    pub record_size: String,
    pub quota: i64,
    pub refquota: i64,
    /// Zero for filesystems.
    pub volsize: i64,
    pub used: i64,
    pub available: i64,
    pub encrypted: bool,
    pub locked: bool,
}

/// Filesystem creation options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDatasetOpts {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub comments: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub compression: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub atime: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub readonly: String,
    #[serde(rename = "recordsize", skip_serializing_if = "is_zero")]
    pub record_size: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub quota: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub refquota: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub share_type: String,
}

/// Zvol creation options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateZvolOpts {
    pub name: String,
    /// Size in bytes.
    pub volsize: i64,
    #[serde(rename = "volblocksize", skip_serializing_if = "is_zero")]
    pub block_size: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub sparse: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub comments: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub compression: String,
}

/// Creation payload. The variant decides the `type` discriminant.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum DatasetCreate {
    Filesystem(CreateDatasetOpts),
    Volume(CreateZvolOpts),
}

/// Update options. `None` leaves a property unchanged; `Some(0)` on a size
/// removes the limit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDatasetOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<String>,
    #[serde(rename = "recordsize", skip_serializing_if = "Option::is_none")]
    pub record_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub quota: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub refquota: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub volsize: Option<i64>,
}

/// Modifiers for `pool.dataset.delete`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteDatasetOpts {
    pub recursive: bool,
    pub force: bool,
}

#[derive(Debug, Deserialize)]
pub struct DatasetWire {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    pool: String,
    #[serde(rename = "type", default)]
    kind: DatasetType,
    #[serde(default, deserialize_with = "nullable")]
    mountpoint: String,
    #[serde(default)]
    comments: Option<Property>,
    #[serde(default)]
    compression: Option<Property>,
    #[serde(default)]
    atime: Option<Property>,
    #[serde(default)]
    readonly: Option<Property>,
    #[serde(default)]
    recordsize: Option<Property>,
    #[serde(default)]
    quota: Option<Property<i64>>,
    #[serde(default)]
    refquota: Option<Property<i64>>,
    #[serde(default)]
    volsize: Option<Property<i64>>,
    #[serde(default)]
    used: Option<Property<i64>>,
    #[serde(default)]
    available: Option<Property<i64>>,
    #[serde(default)]
    encrypted: bool,
    #[serde(default)]
    locked: bool,
}

impl From<DatasetWire> for Dataset {
    fn from(wire: DatasetWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            pool: wire.pool,
            kind: wire.kind,
            mountpoint: wire.mountpoint,
            comments: text_of(wire.comments),
            compression: text_of(wire.compression),
            atime: text_of(wire.atime),
            readonly: text_of(wire.readonly),
            record_size: text_of(wire.recordsize),
            quota: parsed_of(wire.quota),
            refquota: parsed_of(wire.refquota),
            volsize: parsed_of(wire.volsize),
            used: parsed_of(wire.used),
            available: parsed_of(wire.available),
            encrypted: wire.encrypted,
            locked: wire.locked,
        }
    }
}

impl Resource for Dataset {
    const KIND: &'static str = "dataset";
    const NAMESPACE: Namespace = Namespace::Fixed("pool.dataset");
    const LOOKUP: Lookup = Lookup::Direct;
    type Id = String;
    type Wire = DatasetWire;
    type Create = DatasetCreate;

    fn from_wire(wire: DatasetWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &String {
        &self.id
    }
}

impl Updatable for Dataset {
    type Update = UpdateDatasetOpts;
}
