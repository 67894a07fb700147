//! Order Repository
//!
//! 订单创建时校验菜单引用并快照价格；totalAmount 只在行项目
//! 写入/变更时由服务端重算，其余更新保持原值。

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{
    MenuItem, MenuItemSummary, Order, OrderItem, OrderItemInput, OrderItemView, OrderPatch,
    OrderStatus, OrderView, serde_helpers,
};
use crate::money;
use crate::utils::time::now_millis;

const ORDER_TABLE: &str = "order";
const MENU_TABLE: &str = "menu_item";

static ORDER_SEQ: AtomicU32 = AtomicU32::new(0);

/// 生成人类可读订单号: ORD-{毫秒时间戳}-{3位序号}
///
/// 同一毫秒内靠进程内序号区分，orderNumber 上有唯一索引兜底
pub(crate) fn generate_order_number() -> String {
    let seq = ORDER_SEQ.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("ORD-{}-{:03}", now_millis(), seq)
}

/// 列表过滤条件 (status 已剔除 "All"，原样匹配存储值)
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
}

/// Top-seller 聚合行 (join 菜单详情前)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerRow {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub total_quantity: i64,
    pub total_revenue: f64,
    pub order_count: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Paged listing, newest first, with total count of all matches
    pub async fn find_page(
        &self,
        filter: &OrderFilter,
        page: i64,
        limit: i64,
    ) -> RepoResult<(Vec<Order>, i64)> {
        let where_clause = if filter.status.is_some() {
            " WHERE status = $status"
        } else {
            ""
        };

        let start = (page - 1) * limit;
        let list_sql = format!(
            "SELECT * FROM order{where_clause} ORDER BY createdAt DESC LIMIT {limit} START {start}"
        );
        let count_sql = format!("SELECT count() FROM order{where_clause} GROUP ALL");

        let mut query = self.base.db().query(list_sql).query(count_sql);
        if let Some(status) = &filter.status {
            query = query.bind(("status", status.clone()));
        }

        let mut result = query.await?;
        let orders: Vec<Order> = result.take(0)?;
        let total: Option<i64> = result.take((1, "count"))?;

        Ok((orders, total.unwrap_or(0)))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record).await?;
        Ok(order)
    }

    /// Create an order
    ///
    /// 校验每个引用的菜单项存在且可供应，快照当前价格，
    /// 用快照计算 totalAmount。任何校验失败都不写入记录。
    pub async fn create(
        &self,
        customer_name: String,
        table_number: i32,
        notes: Option<String>,
        items: Vec<OrderItemInput>,
    ) -> RepoResult<Order> {
        let mut ids: Vec<RecordId> = Vec::with_capacity(items.len());
        for line in &items {
            ids.push(parse_record_id(MENU_TABLE, &line.menu_item)?);
        }

        let menu_items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id IN $ids")
            .bind(("ids", ids.clone()))
            .await?
            .take(0)?;

        let by_id: HashMap<String, &MenuItem> = menu_items
            .iter()
            .filter_map(|m| m.id.as_ref().map(|id| (id.to_string(), m)))
            .collect();

        // 去重后统计缺失引用
        let mut seen = HashSet::new();
        let missing = ids
            .iter()
            .map(|id| id.to_string())
            .filter(|key| !by_id.contains_key(key) && seen.insert(key.clone()))
            .count();
        if missing > 0 {
            return Err(RepoError::NotFound(format!(
                "Some menu items not found ({missing} missing)"
            )));
        }

        let unavailable: Vec<&str> = menu_items
            .iter()
            .filter(|m| !m.is_available)
            .map(|m| m.name.as_str())
            .collect();
        if !unavailable.is_empty() {
            return Err(RepoError::Validation(format!(
                "Some items are unavailable: {}",
                unavailable.join(", ")
            )));
        }

        // 快照当前价格
        let lines: Vec<OrderItem> = items
            .iter()
            .zip(ids)
            .map(|(input, id)| {
                let menu = by_id[&id.to_string()];
                OrderItem {
                    menu_item: id,
                    quantity: input.quantity,
                    price: menu.price,
                }
            })
            .collect();

        let total_amount = money::order_total(&lines);
        let now = now_millis();

        let order = Order {
            id: None,
            order_number: generate_order_number(),
            items: lines,
            total_amount,
            status: OrderStatus::Pending,
            customer_name,
            table_number,
            notes,
            created_at: now,
            updated_at: now,
        };

        self.insert(order).await
    }

    /// 直接写入完整订单 (seed 工具使用)
    pub async fn insert(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Partial update; items 变更时重算 totalAmount，否则保持原值
    pub async fn update(&self, id: &str, patch: OrderPatch) -> RepoResult<Order> {
        let record = parse_record_id(ORDER_TABLE, id)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let total_amount = patch.items.as_ref().map(|items| money::order_total(items));

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct OrderMerge<'a> {
            #[serde(flatten)]
            patch: &'a OrderPatch,
            #[serde(skip_serializing_if = "Option::is_none")]
            total_amount: Option<f64>,
            updated_at: i64,
        }

        let merge = OrderMerge {
            patch: &patch,
            total_amount,
            updated_at: now_millis(),
        };

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record))
            .bind(("data", serde_json::to_value(&merge).unwrap_or_default()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete an order (管理员操作)
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record = parse_record_id(ORDER_TABLE, id)?;
        let deleted: Option<Order> = self.base.db().delete(record).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }
        Ok(())
    }

    /// Join line items to their menu items' display fields
    ///
    /// 只用于响应展示，不回写存储的价格快照；
    /// 已删除的菜单项 join 为 None。
    pub async fn join_menu_fields(&self, orders: Vec<Order>) -> RepoResult<Vec<OrderView>> {
        let mut seen = HashSet::new();
        let mut ids: Vec<RecordId> = Vec::new();
        for order in &orders {
            for line in &order.items {
                if seen.insert(line.menu_item.to_string()) {
                    ids.push(line.menu_item.clone());
                }
            }
        }

        let menu_items: Vec<MenuItem> = if ids.is_empty() {
            Vec::new()
        } else {
            self.base
                .db()
                .query("SELECT * FROM menu_item WHERE id IN $ids")
                .bind(("ids", ids))
                .await?
                .take(0)?
        };

        let mut by_id: HashMap<String, MenuItemSummary> = HashMap::new();
        for item in menu_items {
            if let Some(id) = item.id.clone() {
                by_id.insert(
                    id.to_string(),
                    MenuItemSummary {
                        id,
                        name: item.name,
                        category: item.category,
                        price: item.price,
                        image_url: item.image_url,
                    },
                );
            }
        }

        let views = orders
            .into_iter()
            .map(|order| {
                let items = order
                    .items
                    .into_iter()
                    .map(|line| OrderItemView {
                        menu_item: by_id.get(&line.menu_item.to_string()).cloned(),
                        quantity: line.quantity,
                        price: line.price,
                    })
                    .collect();
                OrderView {
                    id: order.id,
                    order_number: order.order_number,
                    items,
                    total_amount: order.total_amount,
                    status: order.status,
                    customer_name: order.customer_name,
                    table_number: order.table_number,
                    notes: order.notes,
                    created_at: order.created_at,
                    updated_at: order.updated_at,
                }
            })
            .collect();

        Ok(views)
    }

    /// Top-seller 聚合：按菜单项合计销量和销售额，销量降序
    ///
    /// 销量相等时不保证次序 (跟随存储引擎)。
    pub async fn top_sellers(&self, limit: i64) -> RepoResult<Vec<TopSellerRow>> {
        let mut result = self
            .base
            .db()
            .query("LET $lines = array::flatten((SELECT VALUE items FROM order));")
            .query(
                "LET $expanded = (SELECT menuItem, quantity, price * quantity AS lineRevenue FROM $lines);",
            )
            .query(format!(
                "SELECT menuItem, math::sum(quantity) AS totalQuantity, \
                        math::sum(lineRevenue) AS totalRevenue, count() AS orderCount \
                 FROM $expanded GROUP BY menuItem \
                 ORDER BY totalQuantity DESC LIMIT {limit};"
            ))
            .await?;

        let rows: Vec<TopSellerRow> = result.take(2)?;
        Ok(rows)
    }
}
