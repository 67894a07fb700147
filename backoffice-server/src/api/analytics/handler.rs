//! Analytics API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{Category, serde_helpers};
use crate::db::repository::{MenuItemRepository, OrderRepository};
use crate::money;
use crate::utils::{AppResponse, AppResult};

/// 报表条目数量
const TOP_SELLERS_LIMIT: i64 = 5;

/// Top-seller 报表条目
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item_id: RecordId,
    pub name: String,
    pub category: Category,
    /// 历史总销量
    pub total_quantity: i64,
    /// 历史销售额 (按快照价格，保留两位小数)
    pub total_revenue: f64,
    /// 出现在多少个订单行中
    pub order_count: i64,
}

/// GET /api/analytics/top-sellers - 按销量排序的前五菜单项
///
/// 销量相等时次序跟随存储引擎，不做二级排序
pub async fn top_sellers(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<TopSeller>>>> {
    let order_repo = OrderRepository::new(state.db.clone());
    let menu_repo = MenuItemRepository::new(state.db.clone());

    let rows = order_repo.top_sellers(TOP_SELLERS_LIMIT).await?;

    // Join back to menu items; 已删除的菜单项不进入报表
    let mut report = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(menu_item) = menu_repo.find_by_id(&row.menu_item.to_string()).await? else {
            continue;
        };
        report.push(TopSeller {
            menu_item_id: row.menu_item,
            name: menu_item.name,
            category: menu_item.category,
            total_quantity: row.total_quantity,
            total_revenue: money::round_amount(row.total_revenue),
            order_count: row.order_count,
        });
    }

    Ok(Json(AppResponse::success(report)))
}
