//! Menu API integration tests
//!
//! 内存数据库 + oneshot 路由分发，覆盖 CRUD、分页过滤、搜索和
//! 供应状态切换。

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_menu_item, delete, get, patch, post, put, test_app};

#[tokio::test]
async fn create_applies_defaults_and_fetches_back() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/menu",
        json!({ "name": "Garlic Bread", "category": "Appetizer", "price": 199.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    let data = &body["data"];
    assert_eq!(data["name"], json!("Garlic Bread"));
    assert_eq!(data["category"], json!("Appetizer"));
    assert_eq!(data["price"], json!(199.0));
    // Defaults
    assert_eq!(data["isAvailable"], json!(true));
    assert_eq!(data["preparationTime"], json!(15));
    assert_eq!(data["imageUrl"], json!("/foodplaceholder.png"));
    assert_eq!(data["ingredients"], json!([]));

    let id = data["id"].as_str().expect("id");
    let (status, body) = get(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Garlic Bread"));
}

#[tokio::test]
async fn create_requires_name_price_and_category() {
    let app = test_app().await;

    for payload in [
        json!({ "name": "Soup" }),
        json!({ "price": 100.0, "category": "Appetizer" }),
        json!({ "name": "Soup", "price": 100.0 }),
        json!({}),
    ] {
        let (status, body) = post(&app, "/api/menu", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Name, price, and category are required"));
    }
}

#[tokio::test]
async fn create_rejects_non_positive_price() {
    let app = test_app().await;

    for price in [0.0, -5.0] {
        let (status, body) = post(
            &app,
            "/api/menu",
            json!({ "name": "Soup", "category": "Appetizer", "price": price }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body["success"], json!(false));
    }
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/menu",
        json!({ "name": "Soup", "category": "Snacks", "price": 100.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn list_filters_category_and_reports_full_total() {
    let app = test_app().await;

    for name in ["Lava Cake", "Cheesecake", "Tiramisu"] {
        create_menu_item(&app, name, "Dessert", 249.0).await;
    }
    create_menu_item(&app, "Beef Burger", "Main Course", 449.0).await;
    create_menu_item(&app, "Pizza", "Main Course", 349.0).await;

    let (status, body) = get(&app, "/api/menu?category=Dessert&page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().expect("data array");
    assert!(data.len() <= 2);
    for item in data {
        assert_eq!(item["category"], json!("Dessert"));
    }
    // total counts every Dessert regardless of limit
    assert_eq!(body["pagination"]["total"], json!(3));
    assert_eq!(body["pagination"]["totalPages"], json!(2));
    assert_eq!(body["pagination"]["page"], json!(1));
    assert_eq!(body["pagination"]["limit"], json!(2));

    // category=All means no filter
    let (_, body) = get(&app, "/api/menu?category=All&limit=10").await;
    assert_eq!(body["pagination"]["total"], json!(5));
}

#[tokio::test]
async fn list_filters_availability() {
    let app = test_app().await;

    create_menu_item(&app, "Cappuccino", "Beverage", 149.0).await;
    let id = create_menu_item(&app, "Mojito", "Beverage", 199.0).await;
    patch(&app, &format!("/api/menu/{id}")).await;

    let (status, body) = get(&app, "/api/menu?isAvailable=false").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], json!("Mojito"));

    let (_, body) = get(&app, "/api/menu?isAvailable=true").await;
    assert_eq!(body["pagination"]["total"], json!(1));
}

#[tokio::test]
async fn toggle_availability_twice_restores_original() {
    let app = test_app().await;
    let id = create_menu_item(&app, "Orange Juice", "Beverage", 179.0).await;

    let (status, body) = patch(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isAvailable"], json!(false));

    let (status, body) = patch(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isAvailable"], json!(true));
}

#[tokio::test]
async fn update_is_partial_and_revalidates() {
    let app = test_app().await;
    let id = create_menu_item(&app, "Caesar Salad", "Appetizer", 299.0).await;

    // invalid price rejected, nothing changes
    let (status, _) = put(&app, &format!("/api/menu/{id}"), json!({ "price": -1.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(body["data"]["price"], json!(299.0));

    // partial update touches only the provided fields
    let (status, body) = put(&app, &format!("/api/menu/{id}"), json!({ "price": 319.0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], json!(319.0));
    assert_eq!(body["data"]["name"], json!("Caesar Salad"));
    assert_eq!(body["data"]["category"], json!("Appetizer"));

    // invalid category rejected
    let (status, _) = put(
        &app,
        &format!("/api/menu/{id}"),
        json!({ "category": "Street Food" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_item_is_not_found() {
    let app = test_app().await;

    let (status, body) = put(
        &app,
        "/api/menu/menu_item:doesnotexist",
        json!({ "price": 10.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn delete_removes_item() {
    let app = test_app().await;
    let id = create_menu_item(&app, "Sparkling Water", "Beverage", 99.0).await;

    let (status, body) = delete(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Menu item deleted successfully"));

    let (status, _) = get(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // deleting again reports not found
    let (status, _) = delete(&app, &format!("/api/menu/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_name_description_and_ingredients() {
    let app = test_app().await;

    post(
        &app,
        "/api/menu",
        json!({
            "name": "Garlic Bread",
            "category": "Appetizer",
            "price": 199.0,
            "ingredients": ["French Bread", "Garlic", "Butter"]
        }),
    )
    .await;
    post(
        &app,
        "/api/menu",
        json!({
            "name": "Caesar Salad",
            "description": "Romaine lettuce with croutons and parmesan",
            "category": "Appetizer",
            "price": 299.0
        }),
    )
    .await;

    // name match, case-insensitive
    let (status, body) = get(&app, "/api/menu/search?q=garlic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], json!("Garlic Bread"));

    // description match
    let (_, body) = get(&app, "/api/menu/search?q=CROUTONS").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], json!("Caesar Salad"));

    // ingredient match
    let (_, body) = get(&app, "/api/menu/search?q=butter").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // no match
    let (_, body) = get(&app, "/api/menu/search?q=sushi").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_excludes_unavailable_items() {
    let app = test_app().await;
    let id = create_menu_item(&app, "Garlic Bread", "Appetizer", 199.0).await;

    let (_, body) = get(&app, "/api/menu/search?q=garlic").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    patch(&app, &format!("/api/menu/{id}")).await;

    let (_, body) = get(&app, "/api/menu/search?q=garlic").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_empty_query_is_empty_success() {
    let app = test_app().await;
    create_menu_item(&app, "Cappuccino", "Beverage", 149.0).await;

    for uri in ["/api/menu/search?q=", "/api/menu/search"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["message"], json!("Empty search query"));
    }
}
