use crate::framework::params::{clear_zero, is_zero};
use crate::framework::wire::nullable;
use crate::framework::{Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

/// A local account on the appliance.
///
/// # Resource
/// Lives under `user.*`, fetched with a filtered query on `id`. Secondary
/// lookups by `username` and `uid` go through
/// [`UserClient`](crate::clients::UserClient).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: i64,
    pub uid: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub home: String,
    pub shell: String,
    /// Row id of the primary group.
    pub group_id: i64,
    pub group_name: String,
    /// Row ids of auxiliary groups.
    pub groups: Vec<i64>,
    pub smb: bool,
    pub password_disabled: bool,
    pub locked: bool,
    pub sudo_commands: Vec<String>,
    pub sudo_commands_nopasswd: Vec<String>,
    pub ssh_public_key: String,
    pub builtin: bool,
    pub immutable: bool,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserOpts {
    pub username: String,
    pub full_name: String,
    /// Zero lets the appliance pick the next free uid.
    #[serde(skip_serializing_if = "is_zero")]
    pub uid: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub password: String,
    pub password_disabled: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub group: i64,
    pub group_create: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub groups: Vec<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub home: String,
    pub home_create: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub shell: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub email: String,
    pub smb: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub sudo_commands: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub sudo_commands_nopasswd: Vec<String>,
    #[serde(rename = "sshpubkey", skip_serializing_if = "is_zero")]
    pub ssh_public_key: String,
}

/// Payload for updating a user. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// `Some("")` clears the address.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudo_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudo_commands_nopasswd: Option<Vec<String>>,
    /// `Some("")` removes the key.
    #[serde(
        rename = "sshpubkey",
        skip_serializing_if = "Option::is_none",
        serialize_with = "clear_zero"
    )]
    pub ssh_public_key: Option<String>,
}

/// Modifiers for `user.delete`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteUserOpts {
    /// Also delete the user's primary group when nothing else uses it.
    pub delete_group: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserWire {
    id: i64,
    uid: i64,
    username: String,
    #[serde(default, deserialize_with = "nullable")]
    full_name: String,
    #[serde(default, deserialize_with = "nullable")]
    email: String,
    #[serde(default, deserialize_with = "nullable")]
    home: String,
    #[serde(default, deserialize_with = "nullable")]
    shell: String,
    #[serde(default, deserialize_with = "nullable")]
    group: UserGroupWire,
    #[serde(default)]
    groups: Vec<i64>,
    #[serde(default)]
    smb: bool,
    #[serde(default)]
    password_disabled: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    sudo_commands: Vec<String>,
    #[serde(default)]
    sudo_commands_nopasswd: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    sshpubkey: String,
    #[serde(default)]
    builtin: bool,
    #[serde(default)]
    immutable: bool,
}

#[derive(Debug, Default, Deserialize)]
struct UserGroupWire {
    #[serde(default)]
    id: i64,
    #[serde(default, deserialize_with = "nullable")]
    bsdgrp_group: String,
}

impl From<UserWire> for User {
    fn from(wire: UserWire) -> Self {
        Self {
            id: wire.id,
            uid: wire.uid,
            username: wire.username,
            full_name: wire.full_name,
            email: wire.email,
            home: wire.home,
            shell: wire.shell,
            group_id: wire.group.id,
            group_name: wire.group.bsdgrp_group,
            groups: wire.groups,
            smb: wire.smb,
            password_disabled: wire.password_disabled,
            locked: wire.locked,
            sudo_commands: wire.sudo_commands,
            sudo_commands_nopasswd: wire.sudo_commands_nopasswd,
            ssh_public_key: wire.sshpubkey,
            builtin: wire.builtin,
            immutable: wire.immutable,
        }
    }
}

impl Resource for User {
    const KIND: &'static str = "user";
    const NAMESPACE: Namespace = Namespace::Fixed("user");
    type Id = i64;
    type Wire = UserWire;
    type Create = CreateUserOpts;

    fn from_wire(wire: UserWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl Updatable for User {
    type Update = UpdateUserOpts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::params::encode;
    use serde_json::json;

    #[test]
    fn test_decode_user_nullables() {
        let wire: UserWire = serde_json::from_value(json!({
            "id": 41,
            "uid": 3000,
            "username": "alice",
            "full_name": "Alice",
            "email": null,
            "home": "/var/empty",
            "shell": "/usr/bin/zsh",
            "group": {"id": 45, "bsdgrp_gid": 3000, "bsdgrp_group": "alice"},
            "groups": [44],
            "smb": true,
            "password_disabled": false,
            "locked": false,
            "sudo_commands": [],
            "sudo_commands_nopasswd": ["ALL"],
            "sshpubkey": null,
            "builtin": false,
            "immutable": false
        }))
        .unwrap();
        let user = User::from_wire(wire);
        assert_eq!(user.email, "");
        assert_eq!(user.ssh_public_key, "");
        assert_eq!(user.group_id, 45);
        assert_eq!(user.group_name, "alice");
        assert_eq!(user.sudo_commands_nopasswd, vec!["ALL".to_string()]);
    }

    #[test]
    fn test_encode_create_user() {
        let opts = CreateUserOpts {
            username: "bob".into(),
            full_name: "Bob".into(),
            password: "hunter2".into(),
            group_create: true,
            ..Default::default()
        };
        assert_eq!(
            encode(&opts, "user create options").unwrap(),
            json!({
                "username": "bob",
                "full_name": "Bob",
                "password": "hunter2",
                "password_disabled": false,
                "group_create": true,
                "home_create": false,
                "smb": false,
                "locked": false
            })
        );
    }

    #[test]
    fn test_email_round_trip() {
        for email in ["", "bob@example.com"] {
            let update = UpdateUserOpts {
                email: Some(email.to_string()),
                ..Default::default()
            };
            let sent = encode(&update, "user update options").unwrap();
            let wire: UserWire = serde_json::from_value(json!({
                "id": 1, "uid": 1000, "username": "bob", "email": sent["email"].clone()
            }))
            .unwrap();
            assert_eq!(User::from_wire(wire).email, email);
        }
    }
}
