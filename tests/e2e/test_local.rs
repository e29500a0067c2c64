use crate::e2e::helpers;

use chrono::Utc;
use helpers::{TestContext, TEST_JWT_SECRET};
use hyper::StatusCode;
use oauth_relay::domain::session::{SessionTokenIssuer, LOCAL_ROLES};
use pretty_assertions::assert_eq;
use test_context::test_context;

fn issuer() -> SessionTokenIssuer {
    SessionTokenIssuer::new(TEST_JWT_SECRET.to_string(), 5)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_issue_local_token_from_form_post(ctx: &TestContext) {
    let before = Utc::now().timestamp();

    let response = ctx
        .client
        .post_form(
            "/local",
            &[
                ("sub", "jdoe"),
                ("id_entreprise", "1234"),
                ("rcaPartnerId", "partner-9"),
            ],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("content-disposition", "attachment; filename=\"token.jwt\"");

    let claims = issuer().decode(&response.text()).unwrap();
    assert_eq!(claims.sub, "jdoe");
    assert_eq!(claims.id_entreprise, "1234");
    assert_eq!(claims.rca_partner_id, "partner-9");
    assert_eq!(claims.roles, LOCAL_ROLES.to_vec());

    let five_hours = 5 * 3600;
    assert!(claims.exp >= before + five_hours);
    assert!(claims.exp <= Utc::now().timestamp() + five_hours);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_issue_local_token_from_query_string(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/local?sub=alice&id_entreprise=42&rcaPartnerId=p1")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let claims = issuer().decode(&response.text()).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.id_entreprise, "42");
    assert_eq!(claims.rca_partner_id, "p1");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_sign_with_server_secret_not_caller_secret(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form(
            "/local",
            &[("sub", "mallory"), ("secret", "caller-chosen-key")],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let token = response.text();

    assert!(issuer().decode(&token).is_ok());
    let caller_issuer = SessionTokenIssuer::new("caller-chosen-key".to_string(), 5);
    assert!(caller_issuer.decode(&token).is_err());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_missing_optional_fields_to_empty(ctx: &TestContext) {
    let response = ctx.client.post_form("/local", &[("sub", "bob")]).await.unwrap();

    response.assert_status(StatusCode::OK);
    let claims = issuer().decode(&response.text()).unwrap();
    assert_eq!(claims.id_entreprise, "");
    assert_eq!(claims.rca_partner_id, "");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_issue_local_token_with_empty_subject(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/local", &[("id_entreprise", "1234")])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let claims = issuer().decode(&response.text()).unwrap();
    assert_eq!(claims.sub, "");
    assert_eq!(claims.id_entreprise, "1234");
    assert_eq!(claims.roles, LOCAL_ROLES.to_vec());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_form_post_with_json_error(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/local", "application/json", r#"{"sub":"jdoe"}"#)
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.body.as_ref().and_then(|b| b.get("message")).is_some(),
        "Expected JSON error body, got {}",
        response.text()
    );
}

#[tokio::test]
async fn it_should_honour_configured_expiration() {
    let ctx = TestContext::with_config(|config| config.jwt_expiration_hours = 1)
        .await
        .unwrap();

    let response = ctx.client.get("/local?sub=carol").await.unwrap();
    response.assert_status(StatusCode::OK);

    let claims = issuer().decode(&response.text()).unwrap();
    assert_eq!(claims.exp - claims.iat, 3600);
}
