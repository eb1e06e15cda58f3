#[macro_use]
mod common;

use anyhow::Result;
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;

use common::TestUser;

#[tokio::test]
async fn preferences_default_to_everything_visible() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;

    let res = user.get(server, "/preferences").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let prefs = res.json::<Value>().await?;
    assert_eq!(
        prefs,
        json!({
            "savingsGoals": true,
            "incomeSources": true,
            "expenses": true,
            "loans": true,
            "tuition": true
        })
    );
    Ok(())
}

#[tokio::test]
async fn hidden_collections_are_omitted_from_dashboard() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;

    let res = user
        .post(server, "/preferences", json!({ "loans": false, "tuition": false }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let stored = res.json::<Value>().await?;
    assert_eq!(stored["loans"], false);
    assert_eq!(stored["savingsGoals"], true);

    let dashboard = user.get(server, "/dashboard").await?.json::<Value>().await?;
    assert!(dashboard.get("loans").is_none());
    assert!(dashboard.get("tuition").is_none());
    assert!(dashboard["savingsGoals"].is_array());

    // Hidden collections are still reachable directly
    let res = user.get(server, "/loans").await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn profile_combines_user_and_preferences() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;

    let profile = user.get(server, "/profile").await?.json::<Value>().await?;
    assert_eq!(profile["user"]["email"], user.email.as_str());
    assert_eq!(
        profile["user"]["passwordLength"],
        user.password.chars().count() as u64
    );
    assert!(profile["user"].get("password").is_none());
    assert_eq!(profile["preferences"]["expenses"], true);
    Ok(())
}

#[tokio::test]
async fn concurrent_first_reads_create_one_preferences_row() -> Result<()> {
    let server = server_or_skip!();
    let user = TestUser::create(server).await?;

    let paths = ["/preferences", "/dashboard"].repeat(4);
    let responses = join_all(paths.iter().map(|path| user.get(server, path))).await;
    for (path, res) in paths.iter().zip(responses) {
        assert_eq!(res?.status(), StatusCode::OK, "GET {}", path);
    }

    let profile = user.get(server, "/profile").await?.json::<Value>().await?;
    let user_id = profile["user"]["userId"]
        .as_str()
        .unwrap_or_default()
        .parse::<uuid::Uuid>()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&server.database_url)
        .await?;
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM preferences WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await?;
    pool.close().await;

    assert_eq!(count, 1);
    Ok(())
}
