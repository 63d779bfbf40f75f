use std::sync::Arc;

use async_trait::async_trait;
use porto_call::{CallError, CallRequest, Handler, Porto};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Fixture handler: applies a template to an application, echoing back the
/// positional arguments it received.
#[derive(Debug)]
struct SwitchTemplateAction;

#[async_trait]
impl Handler for SwitchTemplateAction {
    async fn run(&self, args: &[Value]) -> Result<Value, String> {
        let apply_id = args
            .first()
            .and_then(Value::as_i64)
            .ok_or_else(|| "missing apply id".to_string())?;
        let template_id = args
            .get(1)
            .and_then(Value::as_i64)
            .ok_or_else(|| "missing template id".to_string())?;
        Ok(json!({
            "apply_id": apply_id,
            "template_id": template_id,
            "switched": true,
        }))
    }
}

/// Creates an application root on disk with the given containers installed.
fn app_root_with_containers(containers: &[&str]) -> TempDir {
    let root = tempfile::tempdir().expect("Failed to create app root");
    for container in containers {
        std::fs::create_dir_all(root.path().join("containers").join(container))
            .expect("Failed to create container dir");
    }
    root
}

#[tokio::test]
async fn test_conventional_call_end_to_end() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();
    porto.registry().register(
        "app/containers/Siteapp/Actions/SwitchTemplateAction",
        || Arc::new(SwitchTemplateAction),
    );

    let result = porto
        .call("Siteapp@SwitchTemplateAction", &[json!(42), json!(7)], &[])
        .await
        .expect("Failed to call handler");

    assert_eq!(
        result,
        json!({ "apply_id": 42, "template_id": 7, "switched": true })
    );
}

#[tokio::test]
async fn test_lowercase_container_is_capitalized() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();
    porto.registry().register(
        "app/containers/Siteapp/Actions/SwitchTemplateAction",
        || Arc::new(SwitchTemplateAction),
    );

    let result = porto
        .call("siteapp@SwitchTemplateAction", &[json!(1), json!(2)], &[])
        .await
        .expect("Failed to call handler");

    assert_eq!(result["switched"], json!(true));
}

#[tokio::test]
async fn test_missing_container_fails_before_instantiation() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();

    let err = porto
        .call("Ghost@DoStuffAction", &[], &[])
        .await
        .expect_err("Expected missing container error");

    assert_eq!(err, CallError::MissingContainer("Ghost".to_string()));
    assert_eq!(err.to_string(), "Container (Ghost) is not installed");
}

#[tokio::test]
async fn test_unregistered_class_fails_with_composed_name() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();

    let err = porto
        .call("Siteapp@DoStuffAction", &[], &[])
        .await
        .expect_err("Expected missing class error");

    assert_eq!(
        err,
        CallError::ClassDoesNotExist("app/containers/Siteapp/Actions/DoStuffAction".to_string())
    );
}

#[tokio::test]
async fn test_raw_identifier_skips_validation() {
    // No containers exist on disk; a raw identifier must still resolve.
    let root = app_root_with_containers(&[]);
    let porto = Porto::builder().app_root(root.path()).build();
    porto
        .registry()
        .register("legacy::SwitchTemplate", || Arc::new(SwitchTemplateAction));

    let result = porto
        .call("legacy::SwitchTemplate", &[json!(3), json!(4)], &[])
        .await
        .expect("Raw identifiers must bypass convention validation");

    assert_eq!(result["apply_id"], json!(3));
}

#[tokio::test]
async fn test_malformed_identifier_is_rejected() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();

    let err = porto
        .call("Siteapp@Switch@TemplateAction", &[], &[])
        .await
        .expect_err("Expected malformed identifier error");

    assert!(matches!(err, CallError::MalformedIdentifier(_)));
}

#[tokio::test]
async fn test_custom_namespace_root() {
    let root = app_root_with_containers(&["Shop"]);
    let porto = Porto::builder()
        .app_root(root.path())
        .namespace_root("vendor")
        .build();
    porto.registry().register(
        "vendor/containers/Shop/Tasks/CheckoutTask",
        || Arc::new(SwitchTemplateAction),
    );

    let result = porto
        .call("Shop@CheckoutTask", &[json!(5), json!(6)], &[])
        .await
        .expect("Failed to call handler under custom namespace root");

    assert_eq!(result["template_id"], json!(6));
}

#[tokio::test]
async fn test_dispatch_from_serialized_request() {
    let root = app_root_with_containers(&["Siteapp"]);
    let porto = Porto::builder().app_root(root.path()).build();
    porto.registry().register(
        "app/containers/Siteapp/Actions/SwitchTemplateAction",
        || Arc::new(SwitchTemplateAction),
    );

    let request: CallRequest = serde_json::from_value(json!({
        "identifier": "Siteapp@SwitchTemplateAction",
        "run_args": [42, 7],
    }))
    .expect("Failed to deserialize request");

    let result = porto.dispatch(&request).await.expect("Failed to dispatch");
    assert_eq!(result["apply_id"], json!(42));
}
