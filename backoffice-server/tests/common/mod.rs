//! 集成测试工具：内存数据库 + oneshot 请求分发
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use backoffice_server::core::{Config, ServerState};
use backoffice_server::db::DbService;
use backoffice_server::build_app;

/// Build an app over a fresh in-memory database
pub async fn test_app() -> Router {
    let db = DbService::memory().await.expect("in-memory database");
    let state = ServerState::new(Config::from_env(), db.db);
    build_app().with_state(state)
}

/// Dispatch a request and parse the JSON body (if any)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request built"),
        None => builder.body(Body::empty()).expect("request built"),
    };

    let response = app.clone().oneshot(request).await.expect("request dispatched");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collected")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "PATCH", uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

/// 创建一个菜单项并返回其 id ("menu_item:...")
pub async fn create_menu_item(app: &Router, name: &str, category: &str, price: f64) -> String {
    let (status, body) = post(
        app,
        "/api/menu",
        json!({ "name": name, "category": category, "price": price }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create menu item: {body}");
    body["data"]["id"]
        .as_str()
        .expect("menu item id")
        .to_string()
}

/// 创建一个订单并返回其 id ("order:...")
pub async fn create_order(app: &Router, items: Value, customer: &str, table: i32) -> String {
    let (status, body) = post(
        app,
        "/api/orders",
        json!({ "items": items, "customerName": customer, "tableNumber": table }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create order: {body}");
    body["data"]["id"].as_str().expect("order id").to_string()
}
