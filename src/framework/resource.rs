//! # Resource Trait
//!
//! The contract every appliance resource (users, datasets, snapshots, ...)
//! implements so that one generic [`ResourceClient`](crate::framework::ResourceClient)
//! can drive all of them.
//!
//! # Architecture Note
//! Everything that varies between resource types is declared here: where the
//! methods live ([`Resource::NAMESPACE`]), how a single object is looked up
//! ([`Resource::LOOKUP`]), what the wire record looks like
//! ([`Resource::Wire`]) and how it becomes the domain object
//! ([`Resource::from_wire`]). The CRUD sequencing is written once in the
//! client.
//!
//! Associated types keep the payloads apart: a `User` client only accepts
//! `CreateUserOpts`, and the compiler rejects a `CreateGroupOpts`.

use crate::framework::error::ClientError;
use crate::framework::params;
use crate::framework::version::Namespace;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Display};

/// How a single object is fetched by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// `<ns>.get_instance` with the bare identifier. A not-found error from
    /// the appliance is reported as an absent object.
    Direct,
    /// `<ns>.query` with `[[field, "=", id]]`. Zero rows is an absent object.
    Query(&'static str),
}

/// Trait that every appliance resource implements.
pub trait Resource: Clone + Debug + Send + Sync + Sized + 'static {
    /// Short name used in logs and error contexts (e.g. `"dataset"`).
    const KIND: &'static str;

    /// Method namespace, possibly version-gated.
    const NAMESPACE: Namespace;

    /// Single-object lookup strategy.
    const LOOKUP: Lookup = Lookup::Query("id");

    /// The identifier (numeric id, dataset path, interface name, ...).
    type Id: Clone + Debug + Display + Into<Value> + DeserializeOwned + Send + Sync;

    /// The record the appliance sends back.
    type Wire: DeserializeOwned;

    /// Options value for creation.
    type Create: Serialize + Debug + Send + Sync;

    /// Projects a wire record onto the domain object.
    fn from_wire(wire: Self::Wire) -> Self;

    /// The object's identifier.
    fn id(&self) -> &Self::Id;

    /// Builds the creation payload. Resources whose create call needs a
    /// fixed discriminant override this.
    fn encode_create(opts: &Self::Create) -> Result<Value, ClientError> {
        params::encode(opts, &format!("{} create options", Self::KIND))
    }

    /// Pulls the identifier out of a creation response, which may be the
    /// bare identifier or a (possibly partial) record carrying `id`.
    fn created_id(response: Value) -> Result<Self::Id, ClientError> {
        serde_json::from_value::<CreatedId<Self::Id>>(response)
            .map(CreatedId::into_id)
            .map_err(|e| ClientError::decode(format!("{} create response", Self::KIND), e))
    }
}

/// Resources that support `update`.
pub trait Updatable: Resource {
    /// Options value for update. Every field is three-state.
    type Update: Serialize + Debug + Send + Sync;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedId<I> {
    Bare(I),
    Record { id: I },
}

impl<I> CreatedId<I> {
    fn into_id(self) -> I {
        match self {
            CreatedId::Bare(id) | CreatedId::Record { id } => id,
        }
    }
}
