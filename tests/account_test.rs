//! Integration tests for user accounts, login and tokens.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_never_exposes_password() {
    let app = helpers::TestApp::new().await;

    let res = app
        .request(
            "POST",
            "/api/v1/user",
            Some(json!({ "username": "lorena", "password": "s3cret" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.data()["username"], "lorena");
    assert!(res.data().get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_user("lorena", "s3cret").await;

    let res = app
        .request(
            "POST",
            "/api/v1/user",
            Some(json!({ "username": "lorena", "password": "other" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "The record is already registered");
}

#[tokio::test]
async fn test_login_then_token_lookup() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("lorena", "s3cret").await;

    let token = app.login("lorena", "s3cret").await;
    assert_eq!(token.len(), 32);

    let res = app.request("GET", "/api/v1/token", None, Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["token"], token);
    assert_eq!(res.data()["user"], user);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_user("lorena", "s3cret").await;

    let res = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "username": "lorena", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert!(res.is_error());
    assert_eq!(res.message(), "Invalid username or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let res = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "username": "nobody", "password": "s3cret" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.count("session").await, 0);
}

#[tokio::test]
async fn test_token_requires_valid_bearer() {
    let app = helpers::TestApp::new().await;

    let res = app.request("GET", "/api/v1/token", None, None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .request("GET", "/api/v1/token", None, Some("not-a-real-token"))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert!(res.is_error());
}

#[tokio::test]
async fn test_change_username_and_password() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("lorena", "old").await;

    let res = app
        .request(
            "PUT",
            &format!("/api/v1/user/{user}/username"),
            Some(json!({ "username": "lore" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["username"], "lore");
    assert!(res.data()["updatedAt"].is_string());

    let res = app
        .request(
            "PUT",
            &format!("/api/v1/user/{user}/password"),
            Some(json!({ "password": "new" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);

    app.login("lore", "new").await;
    let res = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "username": "lore", "password": "old" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .request(
            "PUT",
            "/api/v1/user/999/password",
            Some(json!({ "password": "new" })),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.message(), "The user does not exist");
}

#[tokio::test]
async fn test_delete_user_cascades_sessions_and_downloads() {
    let app = helpers::TestApp::new().await;
    let games = app.create_category("Games").await;
    let action = app.create_subcategory("Action", games).await;
    let zelda = app.create_item("Zelda", action).await;
    let user = app.create_user("lorena", "s3cret").await;
    let token = app.login("lorena", "s3cret").await;
    app.request("POST", &format!("/api/v1/descarga/{user}/{zelda}"), None, None)
        .await;

    let res = app
        .request("DELETE", &format!("/api/v1/user/{user}"), None, None)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.message(), "The user was removed successfully");

    assert_eq!(app.count("session").await, 0);
    assert_eq!(app.count("download").await, 0);
    assert_eq!(app.count("item").await, 1);

    let res = app.request("GET", "/api/v1/token", None, Some(&token)).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .request("DELETE", &format!("/api/v1/user/{user}"), None, None)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
