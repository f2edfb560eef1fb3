//! Status contract of the HTTP transport.

use kc_admin_client::{AdminError, Transport};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestEnv, TOKEN};

/// Tests that every request carries the bearer token and fetch decodes 200.
#[tokio::test]
async fn test_fetch_sends_bearer_token() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let realm_path = env.admin_path("");

    Mock::given(method("GET"))
        .and(path(realm_path.as_str()))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realm": "acme", "enabled": true})))
        .expect(1)
        .mount(&env.server)
        .await;

    let realm = env.session.realms().get("acme").await?;
    assert_eq!(realm.realm, "acme");
    assert!(realm.enabled);
    Ok(())
}

/// Tests that a rejected fetch carries status and raw body.
#[tokio::test]
async fn test_fetch_failure_carries_body() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path(env.admin_path("/users/nope").as_str()))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"User not found"}"#))
        .mount(&env.server)
        .await;

    let err = env.session.users().get("acme", "nope").await.unwrap_err();
    match err {
        AdminError::UnexpectedStatus {
            operation,
            status,
            body,
            ..
        } => {
            assert_eq!(operation, "fetch");
            assert_eq!(status, 404);
            assert!(body.contains("User not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

/// Tests that a body that is not JSON is a decode error.
#[tokio::test]
async fn test_fetch_garbage_is_decode_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let address = env.url(&env.admin_path(""));

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&env.server)
        .await;

    let err = env.session.transport().fetch(&address).await.unwrap_err();
    assert!(matches!(err, AdminError::Decode { .. }));
    Ok(())
}

/// Tests that create returns the Location header verbatim.
#[tokio::test]
async fn test_create_returns_location() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let location = env.url(&env.admin_path("/groups/4c1d"));

    Mock::given(method("POST"))
        .and(path(env.admin_path("/groups").as_str()))
        .and(body_json(json!({"name": "ops"})))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", location.as_str()))
        .expect(1)
        .mount(&env.server)
        .await;

    let created = env
        .session
        .transport()
        .create(&env.url(&env.admin_path("/groups")), &json!({"name": "ops"}))
        .await?;
    assert_eq!(created.as_deref(), Some(location.as_str()));
    Ok(())
}

/// Tests that a create answered with 200 is never accepted.
#[tokio::test]
async fn test_create_rejects_200() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "4c1d"})))
        .mount(&env.server)
        .await;

    let err = env
        .session
        .transport()
        .create(&env.url(&env.admin_path("/groups")), &json!({"name": "ops"}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(200));
    Ok(())
}

/// Tests that replace accepts only 204.
#[tokio::test]
async fn test_replace_rejects_200() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&env.server)
        .await;

    let err = env
        .session
        .transport()
        .replace(&env.url(&env.admin_path("")), Some(&json!({"realm": "acme"})))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AdminError::UnexpectedStatus { operation: "replace", status: 200, .. }
    ));
    Ok(())
}

/// Tests that relationship deletes carry their body.
#[tokio::test]
async fn test_remove_sends_body() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let composites = env.admin_path("/clients/c1/roles/admin/composites");

    Mock::given(method("DELETE"))
        .and(path(composites.as_str()))
        .and(body_json(json!([{"id": "r-1"}])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    let ids = std::collections::BTreeSet::from(["r-1".to_string()]);
    env.session
        .composites()
        .remove("acme", "c1", "admin", &ids)
        .await?;
    Ok(())
}
