#[macro_use]
mod common;

use anyhow::Result;
use chrono::Utc;
use finance_api::auth::{Claims, TokenService};
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{unique_email, TestUser, TEST_JWT_SECRET};

#[tokio::test]
async fn register_returns_confirmation_text() -> Result<()> {
    let server = server_or_skip!();

    let res = reqwest::Client::new()
        .post(server.url("/register"))
        .json(&json!({ "email": unique_email(), "password": "long-enough-password" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.text().await?, "User registered successfully.");
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_conflicts() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;

    let res = reqwest::Client::new()
        .post(server.url("/register"))
        .json(&json!({ "email": user.email, "password": "another-password" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn login_distinguishes_unknown_email_and_wrong_password() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;
    let client = reqwest::Client::new();

    let wrong_password = client
        .post(server.url("/login"))
        .json(&json!({ "email": user.email, "password": "not-the-password" }))
        .send()
        .await?;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown = client
        .post(server.url("/login"))
        .json(&json!({ "email": unique_email(), "password": "whatever-password" }))
        .send()
        .await?;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn expired_and_malformed_tokens_are_rejected() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;
    let client = reqwest::Client::new();

    // Same user, but a token that expired an hour ago
    let claims: Claims = {
        let valid = TokenService::new(TEST_JWT_SECRET, chrono::Duration::hours(1)).verify(&user.token)?;
        let now = Utc::now().timestamp();
        Claims {
            user_id: valid.user_id,
            exp: now - 3600,
            iat: now - 7200,
        }
    };
    let expired = TokenService::new(TEST_JWT_SECRET, chrono::Duration::hours(1)).encode(&claims)?;

    for path in ["/dashboard", "/preferences", "/loans", "/tuition", "/profile"] {
        let res = client.get(server.url(path)).bearer_auth(&expired).send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "expired token on {}", path);

        let res = client
            .get(server.url(path))
            .bearer_auth("definitely.not.valid")
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "malformed token on {}", path);
    }

    let res = client
        .delete(server.url("/delete-account"))
        .bearer_auth(&expired)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
