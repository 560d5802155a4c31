//! # ResourceService Trait
//!
//! Common interface for the typed resource clients in [`clients`](crate::clients),
//! adding default `get`, `list` and `delete` on top of the generic
//! [`ResourceClient`]. Clients only write the operations that differ
//! per resource (create options, delete modifiers, verbs).
//!
//! The [`resource_client!`](crate::resource_client) macro generates the
//! wrapper struct and this trait's implementation, so a new resource client
//! starts at one line.

use crate::framework::caller::Caller;
use crate::framework::client::ResourceClient;
use crate::framework::error::ClientError;
use crate::framework::resource::Resource;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    /// The capability this client runs on.
    type Caller: Caller + ?Sized + 'static;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T, Self::Caller>;

    /// Fetch an object by identifier. `Ok(None)` when it does not exist.
    async fn get(&self, id: T::Id) -> Result<Option<T>, ClientError> {
        self.inner().get(id).await
    }

    /// Every object of this type. Empty when there are none.
    async fn list(&self) -> Result<Vec<T>, ClientError> {
        self.inner().list().await
    }

    /// Delete by identifier without modifiers.
    async fn delete(&self, id: T::Id) -> Result<(), ClientError> {
        self.inner().delete(id).await
    }
}

/// Declares `<Resource>Client<C>`, a cloneable wrapper around
/// `ResourceClient<Resource, C>` implementing [`ResourceService`].
#[macro_export]
macro_rules! resource_client {
    ($(#[$meta:meta])* $resource:ident) => {
        $crate::__paste! {
            $(#[$meta])*
            pub struct [<$resource Client>]<C: ?Sized> {
                inner: $crate::framework::ResourceClient<$resource, C>,
            }

            impl<C: ?Sized> Clone for [<$resource Client>]<C> {
                fn clone(&self) -> Self {
                    Self { inner: self.inner.clone() }
                }
            }

            impl<C: $crate::framework::Caller + ?Sized + 'static> [<$resource Client>]<C> {
                pub fn new(inner: $crate::framework::ResourceClient<$resource, C>) -> Self {
                    Self { inner }
                }
            }

            impl<C: $crate::framework::Caller + ?Sized + 'static>
                $crate::framework::ResourceService<$resource> for [<$resource Client>]<C>
            {
                type Caller = C;

                fn inner(&self) -> &$crate::framework::ResourceClient<$resource, C> {
                    &self.inner
                }
            }
        }
    };
}
