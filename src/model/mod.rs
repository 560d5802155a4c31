//! Domain objects, options values and wire records, one module per resource
//! type. Each resource implements [`Resource`](crate::framework::Resource).

pub mod container;
pub mod cronjob;
pub mod dataset;
pub mod group;
pub mod interface;
pub mod snapshot;
pub mod system;
pub mod user;
pub mod vm;

pub use container::*;
pub use cronjob::*;
pub use dataset::*;
pub use group::*;
pub use interface::*;
pub use snapshot::*;
pub use system::*;
pub use user::*;
pub use vm::*;
