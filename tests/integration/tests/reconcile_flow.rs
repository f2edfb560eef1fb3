//! Driver steps over the real HTTP transport.

use kc_admin_client::{ClientRepresentation, Field, RealmRepresentation};
use kc_reconcile::{
    DesiredClient, DesiredGroupMembership, DesiredRealm, Operation, Outcome, Reconciler,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, Request, ResponseTemplate};

use crate::common::TestEnv;

/// Tests that creation returns the record fetched from the Location header.
#[tokio::test]
async fn test_client_create_fetches_location_once() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let client_path = env.admin_path("/clients/7a3e");

    Mock::given(method("POST"))
        .and(path(env.admin_path("/clients").as_str()))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", env.url(&client_path).as_str()))
        .expect(1)
        .mount(&env.server)
        .await;

    Mock::given(method("GET"))
        .and(path(client_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7a3e",
            "clientId": "portal",
            "enabled": true,
            "publicClient": true,
            "redirectUris": ["https://portal.example.com/*"]
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let reconciler = Reconciler::new(env.session.clone());
    let desired = DesiredClient::new("acme", ClientRepresentation::new("portal"));

    let outcome = reconciler.run(Operation::Create, &desired).await?;

    let Outcome::Created(observed) = outcome else {
        panic!("expected a created client");
    };
    assert_eq!(observed.client.id, Field::Value("7a3e".to_string()));
    assert_eq!(observed.client.redirect_uris, ["https://portal.example.com/*"]);
    Ok(())
}

/// Tests that an unset flag stays off the wire while an explicit false is sent.
#[tokio::test]
async fn test_realm_update_payload_presence() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let realm_path = env.admin_path("");

    Mock::given(method("PUT"))
        .and(path(realm_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&env.server)
        .await;

    Mock::given(method("GET"))
        .and(path(realm_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realm": "acme", "enabled": true})))
        .mount(&env.server)
        .await;

    let reconciler = Reconciler::new(env.session.clone());
    let unset = DesiredRealm::new(RealmRepresentation::new("acme"));
    let mut explicit = RealmRepresentation::new("acme");
    explicit.verify_email = Field::Value(false);

    reconciler.run(Operation::Update, &unset).await?;
    reconciler
        .run(Operation::Update, &DesiredRealm::new(explicit))
        .await?;

    let puts: Vec<serde_json::Value> = received(&env)
        .await
        .iter()
        .filter(|request| request.method.to_string() == "PUT")
        .map(|request| serde_json::from_slice(&request.body))
        .collect::<Result<_, _>>()?;
    assert_eq!(puts.len(), 2);
    assert!(puts[0].get("verifyEmail").is_none());
    assert_eq!(puts[1].get("verifyEmail"), Some(&json!(false)));
    Ok(())
}

/// Tests that membership converges with removals issued before additions.
#[tokio::test]
async fn test_membership_update_removes_before_adding() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let members_path = env.admin_path("/groups/g-1/members");

    Mock::given(method("GET"))
        .and(path(members_path.as_str()))
        .and(query_param("first", "0"))
        .and(query_param("max", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u-1", "username": "alice"},
            {"id": "u-2", "username": "bob"}
        ])))
        .up_to_n_times(1)
        .mount(&env.server)
        .await;

    Mock::given(method("GET"))
        .and(path(members_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u-2", "username": "bob"},
            {"id": "u-3", "username": "carol"}
        ])))
        .mount(&env.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(env.admin_path("/users/u-1/groups/g-1").as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(env.admin_path("/users/u-3/groups/g-1").as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    let reconciler = Reconciler::new(env.session.clone());
    let desired = DesiredGroupMembership::new("acme", "g-1", ["u-3", "u-2"]);

    let outcome = reconciler.run(Operation::Update, &desired).await?;
    assert_eq!(outcome, Outcome::Updated(desired.members.clone()));

    let mutations: Vec<String> = received(&env)
        .await
        .iter()
        .map(|request| request.method.to_string())
        .filter(|verb| verb != "GET")
        .collect();
    assert_eq!(mutations, ["DELETE", "PUT"]);
    Ok(())
}

/// Tests that a converged membership issues no mutations.
#[tokio::test]
async fn test_membership_update_is_idempotent() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path(env.admin_path("/groups/g-1/members").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u-2", "username": "bob"},
            {"id": "u-1", "username": "alice"}
        ])))
        .mount(&env.server)
        .await;

    let reconciler = Reconciler::new(env.session.clone());
    let desired = DesiredGroupMembership::new("acme", "g-1", ["u-1", "u-2"]);

    reconciler.run(Operation::Update, &desired).await?;

    let requests = received(&env).await;
    assert!(requests.iter().all(|request| request.method.to_string() == "GET"));
    Ok(())
}

async fn received(env: &TestEnv) -> Vec<Request> {
    env.server.received_requests().await.unwrap_or_default()
}
