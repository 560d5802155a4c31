use crate::framework::wire::nullable;
use serde::Deserialize;

/// Host facts reported by `system.info`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SystemInfo {
    /// Full release string, e.g. `TrueNAS-SCALE-24.10.2`.
    pub version: String,
    pub hostname: String,
    #[serde(default)]
    pub uptime_seconds: f64,
    /// Bytes of physical memory.
    #[serde(default)]
    pub physmem: i64,
    #[serde(default)]
    pub cores: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "nullable")]
    pub timezone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub system_product: String,
    #[serde(default, deserialize_with = "nullable")]
    pub system_serial: String,
}
