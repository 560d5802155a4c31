use crate::framework::params::is_zero;
use crate::framework::wire::nullable;
use crate::framework::{Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

/// A local group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub id: i64,
    pub gid: i64,
    pub name: String,
    pub builtin: bool,
    pub smb: bool,
    pub sudo_commands: Vec<String>,
    pub sudo_commands_nopasswd: Vec<String>,
    /// Row ids of member users.
    pub users: Vec<i64>,
}

/// Payload for creating a group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGroupOpts {
    pub name: String,
    /// Zero lets the appliance pick the next free gid.
    #[serde(skip_serializing_if = "is_zero")]
    pub gid: i64,
    pub smb: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub sudo_commands: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub sudo_commands_nopasswd: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub allow_duplicate_gid: bool,
}

/// Payload for updating a group. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateGroupOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudo_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudo_commands_nopasswd: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<i64>>,
}

/// Modifiers for `group.delete`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteGroupOpts {
    /// Also delete users whose primary group this is.
    pub delete_users: bool,
}

#[derive(Debug, Deserialize)]
pub struct GroupWire {
    id: i64,
    gid: i64,
    group: String,
    #[serde(default)]
    builtin: bool,
    #[serde(default)]
    smb: bool,
    #[serde(default, deserialize_with = "nullable")]
    sudo_commands: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    sudo_commands_nopasswd: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    users: Vec<i64>,
}

impl Resource for Group {
    const KIND: &'static str = "group";
    const NAMESPACE: Namespace = Namespace::Fixed("group");
    type Id = i64;
    type Wire = GroupWire;
    type Create = CreateGroupOpts;

    fn from_wire(wire: GroupWire) -> Self {
        Self {
            id: wire.id,
            gid: wire.gid,
            name: wire.group,
            builtin: wire.builtin,
            smb: wire.smb,
            sudo_commands: wire.sudo_commands,
            sudo_commands_nopasswd: wire.sudo_commands_nopasswd,
            users: wire.users,
        }
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl Updatable for Group {
    type Update = UpdateGroupOpts;
}
