//! Seed API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::seed::{self, SeedSummary};
use crate::utils::{AppResponse, AppResult};

/// GET /api/seed - 清空两张表并写入固定示例数据
///
/// 破坏性操作，只用于开发环境
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<AppResponse<SeedSummary>>> {
    let summary = seed::run(&state.db).await?;

    tracing::info!(
        menu_items = summary.menu_items,
        orders = summary.orders,
        "Database reseeded"
    );

    Ok(Json(
        AppResponse::success(summary).with_message("Database seeded successfully"),
    ))
}
