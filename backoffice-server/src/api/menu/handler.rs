//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Category, MenuItem, MenuItemCreate, MenuItemPatch, MenuItemUpdate};
use crate::db::repository::{MenuFilter, MenuItemRepository};
use crate::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, Pagination};

/// 搜索结果上限
const SEARCH_LIMIT: i64 = 50;

/// Query params for listing menu items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub category: Option<String>,
    pub is_available: Option<bool>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Query params for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// 校验 category wire 字符串
fn parse_category(value: &str) -> AppResult<Category> {
    Category::parse(value).ok_or_else(|| {
        AppError::validation(format!(
            "Invalid category: must be one of {}",
            Category::ALL.join(", ")
        ))
    })
}

// =============================================================================
// Menu Handlers
// =============================================================================

/// GET /api/menu - 分页获取菜单项
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AppResponse<Vec<MenuItem>>>> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);

    let filter = MenuFilter {
        category: query.category.filter(|c| c != "All"),
        is_available: query.is_available,
    };

    let repo = MenuItemRepository::new(state.db.clone());
    let (items, total) = repo.find_page(&filter, page, limit).await?;

    Ok(Json(AppResponse::paginated(
        items,
        Pagination::new(page, limit, total),
    )))
}

/// GET /api/menu/search?q= - 搜索可供应的菜单项
///
/// 空查询返回空结果，不报错
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<AppResponse<Vec<MenuItem>>>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Ok(Json(
            AppResponse::success(Vec::new()).with_message("Empty search query"),
        ));
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.search(q, SEARCH_LIMIT).await?;

    Ok(Json(AppResponse::success(items)))
}

/// GET /api/menu/:id - 获取单个菜单项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Menu item not found"))?;

    Ok(Json(AppResponse::success(item)))
}

/// POST /api/menu - 创建菜单项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<MenuItem>>)> {
    let (Some(name), Some(price), Some(category)) =
        (payload.name, payload.price, payload.category)
    else {
        return Err(AppError::validation("Name, price, and category are required"));
    };

    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    money::validate_price(price)?;
    let category = parse_category(&category)?;
    validate_optional_text(payload.description.as_deref(), "description", MAX_NOTE_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;
    if let Some(t) = payload.preparation_time
        && t < 0
    {
        return Err(AppError::validation("Preparation time cannot be negative"));
    }

    let mut item = MenuItem::new(name.trim().to_string(), category, price);
    if let Some(description) = payload.description {
        item.description = description.trim().to_string();
    }
    if let Some(ingredients) = payload.ingredients {
        item.ingredients = ingredients;
    }
    if let Some(is_available) = payload.is_available {
        item.is_available = is_available;
    }
    if let Some(preparation_time) = payload.preparation_time {
        item.preparation_time = preparation_time;
    }
    if let Some(image_url) = payload.image_url {
        item.image_url = image_url;
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let created = repo.create(item).await?;

    Ok((StatusCode::CREATED, Json(AppResponse::success(created))))
}

/// PUT /api/menu/:id - 局部更新，保存前重新校验
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        money::validate_price(price)?;
    }
    let category = match payload.category {
        Some(ref value) => Some(parse_category(value)?),
        None => None,
    };
    validate_optional_text(payload.description.as_deref(), "description", MAX_NOTE_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;
    if let Some(t) = payload.preparation_time
        && t < 0
    {
        return Err(AppError::validation("Preparation time cannot be negative"));
    }

    let patch = MenuItemPatch {
        name: payload.name,
        description: payload.description,
        category,
        price: payload.price,
        ingredients: payload.ingredients,
        is_available: payload.is_available,
        preparation_time: payload.preparation_time,
        image_url: payload.image_url,
    };

    let repo = MenuItemRepository::new(state.db.clone());
    let updated = repo.update(&id, patch).await?;

    Ok(Json(AppResponse::success(updated)))
}

/// DELETE /api/menu/:id - 硬删除
///
/// 历史订单中的价格快照不受影响
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    repo.delete(&id).await?;

    Ok(Json(AppResponse::message_only(
        "Menu item deleted successfully",
    )))
}

/// PATCH /api/menu/:id - 切换供应状态
pub async fn toggle_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.toggle_availability(&id).await?;

    Ok(Json(AppResponse::success(item)))
}
