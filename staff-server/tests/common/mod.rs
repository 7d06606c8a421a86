//! Shared helpers: a fully wired router on a fresh database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use staff_server::{Config, ServerState, build_app};
use tower::ServiceExt;

pub async fn app() -> Router {
    app_with_database("sqlite::memory:").await
}

/// Router over the given database url
pub async fn app_with_database(database_url: &str) -> Router {
    let config = Config {
        database_url: database_url.to_string(),
        ..Config::for_tests()
    };
    let state = ServerState::initialize(&config).await.expect("state");
    build_app(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("{e}: {}", self.body))
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create an employee and return its id
pub async fn hire(app: &Router, first: &str, last: &str, role_id: i64) -> i64 {
    let body = format!(r#"{{"firstName":"{first}","lastName":"{last}","role":{{"id":{role_id}}}}}"#);
    let response = post(app, "/employees", &body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.json()["id"].as_i64().unwrap()
}

/// Ids of the employees embedded in a collection body
pub fn embedded_ids(collection: &Value) -> Vec<i64> {
    collection["_embedded"]["employeeDtoList"]
        .as_array()
        .map(|items| items.iter().filter_map(|e| e["id"].as_i64()).collect())
        .unwrap_or_default()
}
