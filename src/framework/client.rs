//! # Generic Client
//!
//! [`ResourceClient<T, C>`] is the orchestrator every typed client wraps. It
//! sequences the public operations the same way for every resource:
//!
//! - **create**: encode → `<ns>.create` → pull the id from the response →
//!   **get** that id → return the fetched object;
//! - **get**: direct `get_instance` (not-found classified) or a filtered
//!   query, per [`Resource::LOOKUP`];
//! - **get_by**: filtered query on another field; zero rows is `None`;
//! - **list**: unfiltered query; zero rows is an empty `Vec`;
//! - **update**: encode → `<ns>.update [id, opts]` → **get** → return it;
//! - **delete** / verbs: one call, no decode, no refetch.
//!
//! The follow-up fetch of create/update is only issued once the write call
//! has returned successfully. Dropping the returned future cancels the call
//! in flight and nothing after it runs.

use crate::framework::caller::{AsyncCaller, Caller};
use crate::framework::error::{absent_if_not_found, CallError, ClientError};
use crate::framework::params::{self, Filter};
use crate::framework::resource::{Lookup, Resource, Updatable};
use crate::framework::version::Version;
use crate::framework::wire::{decode_list, decode_one};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A type-safe client for one resource type over a shared [`Caller`].
///
/// Cheap to clone: it holds an `Arc` to the caller and the negotiated
/// [`Version`]. Holds no other state, so clones can be used from many tasks.
pub struct ResourceClient<T, C: ?Sized> {
    caller: Arc<C>,
    version: Version,
    _resource: PhantomData<fn() -> T>,
}

impl<T, C: ?Sized> Clone for ResourceClient<T, C> {
    fn clone(&self) -> Self {
        Self {
            caller: Arc::clone(&self.caller),
            version: self.version,
            _resource: PhantomData,
        }
    }
}

impl<T: Resource, C: Caller + ?Sized> ResourceClient<T, C> {
    pub fn new(caller: Arc<C>, version: Version) -> Self {
        Self {
            caller,
            version,
            _resource: PhantomData,
        }
    }

    pub fn caller(&self) -> &Arc<C> {
        &self.caller
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Wire method name for `operation` on the negotiated version.
    pub fn method(&self, operation: &str) -> String {
        T::NAMESPACE.resolve(self.version, operation)
    }

    async fn call(&self, operation: &str, params: Value) -> Result<Value, CallError> {
        let method = self.method(operation);
        debug!(kind = T::KIND, %method, "Call");
        let result = self.caller.call(&method, params).await;
        if let Err(e) = &result {
            debug!(kind = T::KIND, %method, error = %e, "Call failed");
        }
        result
    }

    #[instrument(skip(self, opts), fields(kind = T::KIND))]
    pub async fn create(&self, opts: &T::Create) -> Result<T, ClientError> {
        debug!(?opts, "Create");
        let params = T::encode_create(opts)?;
        let response = self.call("create", params).await?;
        self.fetch_created(response).await
    }

    /// Second half of create: read the id from a creation response and fetch
    /// the canonical object.
    pub async fn fetch_created(&self, response: Value) -> Result<T, ClientError> {
        let id = T::created_id(response)?;
        info!(kind = T::KIND, %id, "Created");
        self.refetch(id).await
    }

    async fn refetch(&self, id: T::Id) -> Result<T, ClientError> {
        match self.get(id.clone()).await? {
            Some(item) => Ok(item),
            None => {
                warn!(kind = T::KIND, %id, "Missing after write");
                Err(ClientError::MissingAfterWrite {
                    kind: T::KIND,
                    id: id.to_string(),
                })
            }
        }
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ClientError> {
        match T::LOOKUP {
            Lookup::Direct => {
                match absent_if_not_found(self.call("get_instance", id.clone().into()).await)? {
                    Some(response) => decode_one(response, "get_instance").map(Some),
                    None => {
                        warn!(%id, "Not found");
                        Ok(None)
                    }
                }
            }
            Lookup::Query(field) => self.get_by(field, id).await,
        }
    }

    /// First object whose `field` equals `value`, or `None` if nothing matches.
    pub async fn get_by(&self, field: &str, value: impl Into<Value>) -> Result<Option<T>, ClientError> {
        let mut found = self.query(&[Filter::eq(field, value)]).await?;
        if found.is_empty() {
            debug!(kind = T::KIND, field, "Not found");
            return Ok(None);
        }
        Ok(Some(found.swap_remove(0)))
    }

    pub async fn query(&self, filters: &[Filter]) -> Result<Vec<T>, ClientError> {
        let response = self.call("query", params::filters(filters)).await?;
        decode_list(response, "query")
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        let response = self.call("query", Value::Null).await?;
        let items: Vec<T> = decode_list(response, "list")?;
        debug!(count = items.len(), "Listed");
        Ok(items)
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn delete(&self, id: T::Id) -> Result<(), ClientError> {
        self.call("delete", id.clone().into()).await?;
        info!(%id, "Deleted");
        Ok(())
    }

    /// Delete with resource-specific modifiers, sent as `[id, modifiers]`.
    #[instrument(skip(self, modifiers), fields(kind = T::KIND))]
    pub async fn delete_with<M>(&self, id: T::Id, modifiers: &M) -> Result<(), ClientError>
    where
        M: Serialize + Sync + ?Sized,
    {
        let modifiers = params::encode(modifiers, &format!("{} delete options", T::KIND))?;
        self.call("delete", params::pair(id.clone(), modifiers)).await?;
        info!(%id, "Deleted");
        Ok(())
    }

    /// Resource-specific verb: one call, result discarded, nothing refetched.
    pub async fn invoke(&self, operation: &str, params: Value) -> Result<(), ClientError> {
        self.call(operation, params).await?;
        info!(kind = T::KIND, operation, "Action ok");
        Ok(())
    }
}

impl<T: Updatable, C: Caller + ?Sized> ResourceClient<T, C> {
    #[instrument(skip(self, opts), fields(kind = T::KIND))]
    pub async fn update(&self, id: T::Id, opts: &T::Update) -> Result<T, ClientError> {
        debug!(?opts, "Update");
        let params = params::encode(opts, &format!("{} update options", T::KIND))?;
        self.call("update", params::pair(id.clone(), params)).await?;
        info!(%id, "Updated");
        self.refetch(id).await
    }
}

impl<T: Resource, C: AsyncCaller + ?Sized> ResourceClient<T, C> {
    async fn call_job(&self, operation: &str, params: Value) -> Result<Value, CallError> {
        let method = self.method(operation);
        debug!(kind = T::KIND, %method, "Job");
        self.caller.call_and_wait(&method, params).await
    }

    /// Create for resources whose creation runs as an appliance job.
    #[instrument(skip(self, opts), fields(kind = T::KIND))]
    pub async fn create_via_job(&self, opts: &T::Create) -> Result<T, ClientError> {
        debug!(?opts, "Create");
        let params = T::encode_create(opts)?;
        let response = self.call_job("create", params).await?;
        self.fetch_created(response).await
    }

    /// Job-backed verb: waits for the job, result discarded.
    pub async fn invoke_job(&self, operation: &str, params: Value) -> Result<(), ClientError> {
        self.call_job(operation, params).await?;
        info!(kind = T::KIND, operation, "Action ok");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockCaller;
    use crate::framework::version::Namespace;
    use serde::Deserialize;
    use serde_json::json;

    // --- Minimal resource ---

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: i64,
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct WidgetWire {
        id: i64,
        name: String,
    }

    #[derive(Debug, Serialize)]
    struct WidgetCreate {
        name: String,
    }

    #[derive(Debug, Serialize)]
    struct WidgetUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    impl Resource for Widget {
        const KIND: &'static str = "widget";
        const NAMESPACE: Namespace = Namespace::Fixed("widget");
        type Id = i64;
        type Wire = WidgetWire;
        type Create = WidgetCreate;

        fn from_wire(wire: WidgetWire) -> Self {
            Self {
                id: wire.id,
                name: wire.name,
            }
        }

        fn id(&self) -> &i64 {
            &self.id
        }
    }

    impl Updatable for Widget {
        type Update = WidgetUpdate;
    }

    fn client(mock: &MockCaller) -> ResourceClient<Widget, MockCaller> {
        ResourceClient::new(Arc::new(mock.clone()), Version::new(25, 10))
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let mock = MockCaller::new();
        mock.expect_call("widget.create").return_ok(json!(4));
        mock.expect_call("widget.query")
            .return_ok(json!([{"id": 4, "name": "gear"}]));
        mock.expect_call("widget.update").return_ok(json!({"id": 4}));
        mock.expect_call("widget.query")
            .return_ok(json!([{"id": 4, "name": "cog"}]));
        mock.expect_call("widget.delete").return_ok(json!(true));

        let widgets = client(&mock);

        let created = widgets.create(&WidgetCreate { name: "gear".into() }).await.unwrap();
        assert_eq!(created, Widget { id: 4, name: "gear".into() });

        let updated = widgets
            .update(4, &WidgetUpdate { name: Some("cog".into()) })
            .await
            .unwrap();
        assert_eq!(updated.name, "cog");

        widgets.delete(4).await.unwrap();
        mock.verify();

        let calls = mock.calls();
        assert_eq!(calls[0].params, json!({"name": "gear"}));
        assert_eq!(calls[1].params, json!([["id", "=", 4]]));
        assert_eq!(calls[2].params, json!([4, {"name": "cog"}]));
        assert_eq!(calls[4].params, json!(4));
    }

    #[tokio::test]
    async fn test_missing_after_write() {
        let mock = MockCaller::new();
        mock.expect_call("widget.create").return_ok(json!({"id": 9}));
        mock.expect_call("widget.query").return_ok(json!([]));

        let err = client(&mock)
            .create(&WidgetCreate { name: "ghost".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingAfterWrite { kind: "widget", ref id } if id == "9"));
    }

    #[tokio::test]
    async fn test_verb_is_single_call() {
        let mock = MockCaller::new();
        mock.expect_call("widget.spin").return_ok(json!(null));

        client(&mock).invoke("spin", json!(4)).await.unwrap();
        assert_eq!(mock.calls().len(), 1);
        mock.verify();
    }
}
