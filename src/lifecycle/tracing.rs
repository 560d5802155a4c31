//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven
//! by `RUST_LOG`. The library itself only emits events; installing a
//! subscriber is up to the application (or a test that wants output).
//!
//! ## What Gets Traced
//!
//! - **Remote calls**: every `Caller::call` at `debug`, with `kind` and `method`
//! - **Mutations**: successful create/update/delete and verbs at `info`
//! - **Absence**: classified not-found results at `warn`, with the id
//! - **Spans**: each public client operation opens a span carrying `kind`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo test
//!
//! # Every wire call and the options being sent
//! RUST_LOG=debug cargo test
//!
//! # Only the orchestrator
//! RUST_LOG=appliance_client::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` a snapshot create on a 25.10 appliance reads:
//!
//! ```text
//! DEBUG create{kind="snapshot"}: Create opts=CreateSnapshotOpts { dataset: "tank/media", name: "daily", recursive: false }
//! DEBUG create{kind="snapshot"}: Call kind="snapshot" method=pool.snapshot.create
//! INFO  create{kind="snapshot"}: Created kind="snapshot" id=tank/media@daily
//! DEBUG create{kind="snapshot"}:get{kind="snapshot" id="tank/media@daily"}: Call kind="snapshot" method=pool.snapshot.query
//! ```

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // kind/method fields already say where an event came from
        .compact()
        .try_init();
}
