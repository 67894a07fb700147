//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderItem, OrderPatch, OrderStatus, OrderUpdate, OrderView};
use crate::db::repository::{OrderFilter, OrderRepository, parse_record_id};
use crate::money;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, Pagination};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

// =============================================================================
// Order Handlers
// =============================================================================

/// GET /api/orders - 分页获取订单 (行项目含菜单展示字段)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AppResponse<Vec<OrderView>>>> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);

    let filter = OrderFilter {
        status: query.status.filter(|s| s != "All"),
    };

    let repo = OrderRepository::new(state.db.clone());
    let (orders, total) = repo.find_page(&filter, page, limit).await?;
    let views = repo.join_menu_fields(orders).await?;

    Ok(Json(AppResponse::paginated(
        views,
        Pagination::new(page, limit, total),
    )))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    let view = joined_view(&repo, order).await?;
    Ok(Json(AppResponse::success(view)))
}

/// POST /api/orders - 创建订单
///
/// 校验引用与供应状态，快照价格，计算总额；任何失败都不写入记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<OrderView>>)> {
    let (Some(items), Some(customer_name), Some(table_number)) =
        (payload.items, payload.customer_name, payload.table_number)
    else {
        return Err(AppError::validation("Missing required fields"));
    };

    if items.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }
    validate_required_text(&customer_name, "customerName", MAX_NAME_LEN)?;
    if table_number < 1 {
        return Err(AppError::validation("Table number must be at least 1"));
    }
    validate_optional_text(payload.notes.as_deref(), "notes", MAX_NOTE_LEN)?;
    for line in &items {
        money::validate_quantity(line.quantity)?;
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .create(
            customer_name.trim().to_string(),
            table_number,
            payload.notes,
            items,
        )
        .await?;

    let view = joined_view(&repo, order).await?;
    Ok((StatusCode::CREATED, Json(AppResponse::success(view))))
}

/// PUT /api/orders/:id - 局部更新
///
/// status 必须是合法枚举值；items 变动时重算 totalAmount
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let status = match payload.status.as_deref() {
        None => None,
        Some(value) => {
            Some(OrderStatus::parse(value).ok_or_else(|| AppError::validation("Invalid status"))?)
        }
    };
    if let Some(ref name) = payload.customer_name {
        validate_required_text(name, "customerName", MAX_NAME_LEN)?;
    }
    if let Some(table_number) = payload.table_number
        && table_number < 1
    {
        return Err(AppError::validation("Table number must be at least 1"));
    }
    validate_optional_text(payload.notes.as_deref(), "notes", MAX_NOTE_LEN)?;

    let items = match payload.items {
        None => None,
        Some(lines) => {
            if lines.is_empty() {
                return Err(AppError::validation("Order must contain at least one item"));
            }
            let mut converted = Vec::with_capacity(lines.len());
            for line in lines {
                money::validate_quantity(line.quantity)?;
                money::validate_price(line.price)?;
                converted.push(OrderItem {
                    menu_item: parse_record_id("menu_item", &line.menu_item)?,
                    quantity: line.quantity,
                    price: line.price,
                });
            }
            Some(converted)
        }
    };

    let patch = OrderPatch {
        status,
        customer_name: payload.customer_name,
        table_number: payload.table_number,
        notes: payload.notes,
        items,
    };

    let repo = OrderRepository::new(state.db.clone());
    let updated = repo.update(&id, patch).await?;

    let view = joined_view(&repo, updated).await?;
    Ok(Json(AppResponse::success(view)))
}

/// DELETE /api/orders/:id - 硬删除 (管理员操作)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete(&id).await?;

    Ok(Json(AppResponse::message_only("Order deleted successfully")))
}

/// 单个订单的 join 视图
async fn joined_view(
    repo: &OrderRepository,
    order: crate::db::models::Order,
) -> AppResult<OrderView> {
    repo.join_menu_fields(vec![order])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::internal("Order missing from join result"))
}
