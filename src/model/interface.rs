use crate::framework::params::{clear_zero, is_zero};
use crate::framework::wire::nullable;
use crate::framework::{Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterfaceType {
    Physical,
    Bridge,
    Vlan,
    LinkAggregation,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A static address on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceAlias {
    /// `INET` or `INET6`.
    #[serde(rename = "type")]
    pub family: String,
    pub address: String,
    pub netmask: u8,
}

/// A network interface, keyed by name (`eno1`, `br0`, `vlan10`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interface {
    pub id: String,
    pub name: String,
    pub kind: InterfaceType,
    pub description: String,
    pub aliases: Vec<InterfaceAlias>,
    pub ipv4_dhcp: bool,
    pub ipv6_auto: bool,
    /// Zero when the appliance default applies.
    pub mtu: i64,
    pub link_state: String,
    pub bridge_members: Vec<String>,
    pub vlan_parent: String,
    /// Zero on non-VLAN interfaces.
    pub vlan_tag: i64,
    pub lag_protocol: String,
    pub lag_ports: Vec<String>,
}

/// Fields shared by every interface kind on creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterfaceCommon {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub description: String,
    pub ipv4_dhcp: bool,
    pub ipv6_auto: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub aliases: Vec<InterfaceAlias>,
    #[serde(skip_serializing_if = "is_zero")]
    pub mtu: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBridgeOpts {
    #[serde(flatten)]
    pub common: InterfaceCommon,
    #[serde(skip_serializing_if = "is_zero")]
    pub bridge_members: Vec<String>,
    pub stp: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVlanOpts {
    #[serde(flatten)]
    pub common: InterfaceCommon,
    #[serde(rename = "vlan_parent_interface")]
    pub parent: String,
    pub vlan_tag: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub vlan_pcp: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLagOpts {
    #[serde(flatten)]
    pub common: InterfaceCommon,
    /// `LACP`, `FAILOVER`, `LOADBALANCE`, ...
    pub lag_protocol: String,
    pub lag_ports: Vec<String>,
}

/// Creation payload. The variant decides the `type` discriminant.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterfaceCreate {
    Bridge(CreateBridgeOpts),
    Vlan(CreateVlanOpts),
    LinkAggregation(CreateLagOpts),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInterfaceOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_dhcp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_auto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<InterfaceAlias>>,
    /// `Some(0)` resets to the default MTU.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub mtu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lag_ports: Option<Vec<String>>,
}

/// Parameters for `interface.commit`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitOpts {
    /// Revert automatically unless checked in before the timeout.
    pub rollback: bool,
    /// Seconds to wait for `interface.checkin`.
    pub checkin_timeout: u32,
}

impl Default for CommitOpts {
    fn default() -> Self {
        Self {
            rollback: true,
            checkin_timeout: 60,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InterfaceWire {
    id: String,
    name: String,
    #[serde(rename = "type", default)]
    kind: InterfaceType,
    #[serde(default, deserialize_with = "nullable")]
    description: String,
    #[serde(default, deserialize_with = "nullable")]
    aliases: Vec<InterfaceAlias>,
    #[serde(default)]
    ipv4_dhcp: bool,
    #[serde(default)]
    ipv6_auto: bool,
    #[serde(default, deserialize_with = "nullable")]
    mtu: i64,
    #[serde(default, deserialize_with = "nullable")]
    state: InterfaceState,
    #[serde(default, deserialize_with = "nullable")]
    bridge_members: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    vlan_parent_interface: String,
    #[serde(default, deserialize_with = "nullable")]
    vlan_tag: i64,
    #[serde(default, deserialize_with = "nullable")]
    lag_protocol: String,
    #[serde(default, deserialize_with = "nullable")]
    lag_ports: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct InterfaceState {
    #[serde(default, deserialize_with = "nullable")]
    link_state: String,
}

impl From<InterfaceWire> for Interface {
    fn from(wire: InterfaceWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            kind: wire.kind,
            description: wire.description,
            aliases: wire.aliases,
            ipv4_dhcp: wire.ipv4_dhcp,
            ipv6_auto: wire.ipv6_auto,
            mtu: wire.mtu,
            link_state: wire.state.link_state,
            bridge_members: wire.bridge_members,
            vlan_parent: wire.vlan_parent_interface,
            vlan_tag: wire.vlan_tag,
            lag_protocol: wire.lag_protocol,
            lag_ports: wire.lag_ports,
        }
    }
}

impl Resource for Interface {
    const KIND: &'static str = "interface";
    const NAMESPACE: Namespace = Namespace::Fixed("interface");
    type Id = String;
    type Wire = InterfaceWire;
    type Create = InterfaceCreate;

    fn from_wire(wire: InterfaceWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &String {
        &self.id
    }
}

impl Updatable for Interface {
    type Update = UpdateInterfaceOpts;
}
