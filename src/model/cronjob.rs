use crate::framework::params::{is_zero, negated, negated_option};
use crate::framework::wire::nullable;
use crate::framework::{Lookup, Namespace, Resource, Updatable};
use serde::{Deserialize, Serialize};

/// Crontab-style schedule. Every field defaults to `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub minute: String,
    pub hour: String,
    pub dom: String,
    pub month: String,
    pub dow: String,
}

impl Default for Schedule {
    fn default() -> Self {
        let any = || "*".to_string();
        Self {
            minute: any(),
            hour: any(),
            dom: any(),
            month: any(),
            dow: any(),
        }
    }
}

/// A scheduled command.
///
/// The appliance stores "suppress output" flags; [`CronJob`] exposes the
/// positive `capture_*` form in both directions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CronJob {
    pub id: i64,
    pub user: String,
    pub command: String,
    pub description: String,
    pub enabled: bool,
    pub capture_stdout: bool,
    pub capture_stderr: bool,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCronJobOpts {
    pub user: String,
    pub command: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub description: String,
    pub enabled: bool,
    #[serde(rename = "stdout", with = "negated")]
    pub capture_stdout: bool,
    #[serde(rename = "stderr", with = "negated")]
    pub capture_stderr: bool,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCronJobOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "stdout", skip_serializing_if = "Option::is_none", with = "negated_option")]
    pub capture_stdout: Option<bool>,
    #[serde(rename = "stderr", skip_serializing_if = "Option::is_none", with = "negated_option")]
    pub capture_stderr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

#[derive(Debug, Deserialize)]
pub struct CronJobWire {
    id: i64,
    #[serde(default, deserialize_with = "nullable")]
    user: String,
    #[serde(default, deserialize_with = "nullable")]
    command: String,
    #[serde(default, deserialize_with = "nullable")]
    description: String,
    #[serde(default)]
    enabled: bool,
    #[serde(rename = "stdout", with = "negated")]
    capture_stdout: bool,
    #[serde(rename = "stderr", with = "negated")]
    capture_stderr: bool,
    #[serde(default)]
    schedule: Schedule,
}

impl From<CronJobWire> for CronJob {
    fn from(wire: CronJobWire) -> Self {
        Self {
            id: wire.id,
            user: wire.user,
            command: wire.command,
            description: wire.description,
            enabled: wire.enabled,
            capture_stdout: wire.capture_stdout,
            capture_stderr: wire.capture_stderr,
            schedule: wire.schedule,
        }
    }
}

impl Resource for CronJob {
    const KIND: &'static str = "cronjob";
    const NAMESPACE: Namespace = Namespace::Fixed("cronjob");
    const LOOKUP: Lookup = Lookup::Direct;
    type Id = i64;
    type Wire = CronJobWire;
    type Create = CreateCronJobOpts;

    fn from_wire(wire: CronJobWire) -> Self {
        wire.into()
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl Updatable for CronJob {
    type Update = UpdateCronJobOpts;
}
