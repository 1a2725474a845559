//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use catalogue_api::{AppState, build_router};
use catalogue_core::config::AppConfig;
use catalogue_database::DatabasePool;
use catalogue_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body, `Null` when the body is empty
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of the envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `message` member of the envelope.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// Whether the envelope reports an error.
    pub fn is_error(&self) -> bool {
        self.body["error"].as_bool().unwrap_or(false)
    }
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database
    pub async fn new() -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(Arc::new(AppConfig::default()), db.clone());
        let router = build_router(state);

        Self { router, db }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).expect("Failed to encode body"))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a category and return its id
    pub async fn create_category(&self, name: &str) -> i64 {
        let res = self
            .request(
                "POST",
                "/api/v1/category",
                Some(serde_json::json!({ "name": name })),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.data()["id"].as_i64().expect("category id")
    }

    /// Create a subcategory and return its id
    pub async fn create_subcategory(&self, name: &str, category: i64) -> i64 {
        let res = self
            .request(
                "POST",
                "/api/v1/subcategory",
                Some(serde_json::json!({ "name": name, "category": category })),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.data()["id"].as_i64().expect("subcategory id")
    }

    /// Create an item and return its id
    pub async fn create_item(&self, name: &str, subcategory: i64) -> i64 {
        let res = self
            .request(
                "POST",
                "/api/v1/item",
                Some(serde_json::json!({ "name": name, "subcategory": subcategory })),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.data()["id"].as_i64().expect("item id")
    }

    /// Register a user and return its id
    pub async fn create_user(&self, username: &str, password: &str) -> i64 {
        let res = self
            .request(
                "POST",
                "/api/v1/user",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.data()["id"].as_i64().expect("user id")
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let res = self
            .request(
                "POST",
                "/api/v1/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "{}", res.body);
        res.data()["token"]
            .as_str()
            .expect("token")
            .to_string()
    }

    /// Count rows of a table directly
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{table}\""))
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count rows")
    }
}
