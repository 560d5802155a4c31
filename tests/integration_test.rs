use appliance_client::framework::mock::{CallKind, MockCaller};
use appliance_client::framework::{ResourceService, Version};
use appliance_client::lifecycle::{setup_tracing, Appliance};
use appliance_client::model::{
    CreateContainerOpts, CreateDatasetOpts, CreateSnapshotOpts, CreateUserOpts, DeleteUserOpts,
    RollbackSnapshotOpts, StopVmOpts, UpdateUserOpts,
};
use serde_json::json;
use std::sync::Arc;

fn appliance(mock: &MockCaller, version: Version) -> Appliance<MockCaller> {
    Appliance::with_version(Arc::new(mock.clone()), version)
}

/// A user's whole life through the facade: create, look up, edit, delete.
#[tokio::test]
async fn test_user_lifecycle() {
    setup_tracing();
    let mock = MockCaller::new();
    mock.expect_call("user.create").return_ok(json!(41));
    mock.expect_call("user.query")
        .return_ok(json!([{"id": 41, "uid": 3000, "username": "alice", "email": null}]));
    mock.expect_call("user.query")
        .return_ok(json!([{"id": 41, "uid": 3000, "username": "alice"}]));
    mock.expect_call("user.update").return_ok(json!({"id": 41}));
    mock.expect_call("user.query")
        .return_ok(json!([{"id": 41, "uid": 3000, "username": "alice", "email": "a@nas.lan"}]));
    mock.expect_call("user.delete").return_ok(json!(true));

    let appliance = appliance(&mock, Version::new(25, 10));

    let created = appliance
        .users
        .create(&CreateUserOpts {
            username: "alice".into(),
            full_name: "Alice".into(),
            group_create: true,
            ..Default::default()
        })
        .await
        .expect("Failed to create user");
    assert_eq!(created.id, 41);
    assert_eq!(created.email, "");

    let by_name = appliance
        .users
        .get_by_username("alice")
        .await
        .expect("Failed to query user")
        .expect("User not found");
    assert_eq!(by_name.uid, 3000);

    let updated = appliance
        .users
        .update(
            41,
            &UpdateUserOpts {
                email: Some("a@nas.lan".into()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update user");
    assert_eq!(updated.email, "a@nas.lan");

    appliance
        .users
        .delete_with(41, &DeleteUserOpts { delete_group: true })
        .await
        .expect("Failed to delete user");

    mock.verify();
    let calls = mock.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[1].params, json!([["id", "=", 41]]));
    assert_eq!(calls[2].params, json!([["username", "=", "alice"]]));
    assert_eq!(calls[3].params, json!([41, {"email": "a@nas.lan"}]));
    assert_eq!(calls[5].params, json!([41, {"delete_group": true}]));
}

#[tokio::test]
async fn test_connect_negotiates_snapshot_namespace() {
    let mock = MockCaller::new();
    mock.expect_call("system.version").return_ok(json!("25.10-MASTER-20250601-010203"));

    let appliance = Appliance::connect(Arc::new(mock.clone())).await.unwrap();
    assert_eq!(appliance.version(), Version::new(25, 10));
    assert_eq!(appliance.snapshots.inner().method("create"), "pool.snapshot.create");
    assert_eq!(appliance.datasets.inner().method("query"), "pool.dataset.query");
    mock.verify();
}

#[tokio::test]
async fn test_snapshot_workflow_on_older_release() {
    let mock = MockCaller::new();
    mock.expect_call("zfs.snapshot.create")
        .return_ok(json!({"id": "tank/media@daily", "snapshot_name": "daily"}));
    mock.expect_call("zfs.snapshot.query").return_ok(json!([{
        "id": "tank/media@daily",
        "snapshot_name": "daily",
        "dataset": "tank/media",
        "pool": "tank",
        "properties": {"userrefs": {"value": "0", "parsed": "0"}}
    }]));
    mock.expect_call("zfs.snapshot.hold").return_ok(json!(true));
    mock.expect_call("zfs.snapshot.rollback").return_ok(json!(null));
    mock.expect_call("zfs.snapshot.query").return_ok(json!([]));

    let appliance = appliance(&mock, Version::new(25, 4));
    let snap = appliance
        .snapshots
        .create(&CreateSnapshotOpts {
            dataset: "tank/media".into(),
            name: "daily".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!snap.has_hold);

    appliance.snapshots.hold(&snap.id).await.unwrap();
    appliance
        .snapshots
        .rollback(
            &snap.id,
            &RollbackSnapshotOpts {
                recursive: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let others = appliance.snapshots.list_for_dataset("tank/empty").await.unwrap();
    assert!(others.is_empty());

    mock.verify();
    let calls = mock.calls();
    assert_eq!(calls[0].params, json!({"dataset": "tank/media", "name": "daily"}));
    assert_eq!(calls[2].params, json!("tank/media@daily"));
    assert_eq!(
        calls[3].params,
        json!(["tank/media@daily", {"force": false, "recursive": true, "recursive_clones": false}])
    );
    assert_eq!(calls[4].params, json!([["dataset", "=", "tank/empty"]]));
}

#[tokio::test]
async fn test_dataset_create_uses_direct_lookup() {
    let mock = MockCaller::new();
    mock.expect_call("pool.dataset.create")
        .return_ok(json!({"id": "tank/media", "name": "tank/media"}));
    mock.expect_call("pool.dataset.get_instance").return_ok(json!({
        "id": "tank/media",
        "name": "tank/media",
        "pool": "tank",
        "type": "FILESYSTEM",
        "quota": {"value": "4K", "parsed": 4096}
    }));

    let appliance = appliance(&mock, Version::new(25, 10));
    let dataset = appliance
        .datasets
        .create_filesystem(CreateDatasetOpts {
            name: "tank/media".into(),
            quota: 4096,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(dataset.quota, 4096);

    let calls = mock.calls();
    assert_eq!(calls[0].params, json!({"type": "FILESYSTEM", "name": "tank/media", "quota": 4096}));
    assert_eq!(calls[1].params, json!("tank/media"));
    mock.verify();
}

#[tokio::test]
async fn test_job_backed_operations() {
    let mock = MockCaller::new();
    mock.expect_job("virt.instance.create").return_ok(json!({"id": "web", "name": "web"}));
    mock.expect_call("virt.instance.query")
        .return_ok(json!([{"id": "web", "name": "web", "status": "RUNNING"}]));
    mock.expect_job("vm.stop").return_ok(json!(null));
    mock.expect_call("vm.poweroff").return_ok(json!(null));
    mock.expect_job("cronjob.run").return_ok(json!(null));

    let appliance = appliance(&mock, Version::new(25, 10));
    let web = appliance
        .containers
        .create(&CreateContainerOpts {
            name: "web".into(),
            image: "debian/12".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(web.status, "RUNNING");

    appliance
        .vms
        .stop(
            3,
            &StopVmOpts {
                force_after_timeout: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    appliance.vms.poweroff(3).await.unwrap();
    appliance.cron_jobs.run(7, true).await.unwrap();

    mock.verify();
    let calls = mock.calls();
    assert_eq!(calls[0].kind, CallKind::Job);
    assert_eq!(calls[0].params["instance_type"], "CONTAINER");
    assert_eq!(calls[1].kind, CallKind::Plain);
    assert_eq!(calls[2].params, json!([3, {"force": false, "force_after_timeout": true}]));
    assert_eq!(calls[3].kind, CallKind::Plain);
    assert_eq!(calls[4].params, json!([7, true]));
}
