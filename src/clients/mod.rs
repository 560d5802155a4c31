//! Typed clients, one per resource, built on
//! [`ResourceClient`](crate::framework::ResourceClient).
//!
//! `get`, `list` and `delete` come from
//! [`ResourceService`](crate::framework::ResourceService); bring it into scope
//! to call them.

pub mod container_client;
pub mod cronjob_client;
pub mod dataset_client;
pub mod group_client;
pub mod interface_client;
pub mod snapshot_client;
pub mod system_client;
pub mod user_client;
pub mod vm_client;

pub use container_client::*;
pub use cronjob_client::*;
pub use dataset_client::*;
pub use group_client::*;
pub use interface_client::*;
pub use snapshot_client::*;
pub use system_client::*;
pub use user_client::*;
pub use vm_client::*;
