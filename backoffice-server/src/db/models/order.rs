//! Order Model
//!
//! 订单行内嵌引用 + 价格快照，菜单价格后续变动不影响历史订单

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::menu_item::MenuItemSummary;
use super::serde_helpers;

pub type OrderId = RecordId;

// =============================================================================
// Order (主表)
// =============================================================================

/// Order status enum
///
/// 状态机不做流转约束：任意状态间可互相转换，只校验枚举成员。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [&'static str; 5] = ["Pending", "Preparing", "Ready", "Delivered", "Cancelled"];

    /// Parse a wire string into the enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Preparing" => Some(Self::Preparing),
            "Ready" => Some(Self::Ready),
            "Delivered" => Some(Self::Delivered),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item — 菜单项引用 + 数量 + 下单时的价格快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: i32,
    /// 创建订单时快照的单价
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    /// 人类可读订单号，全局唯一
    pub order_number: String,
    pub items: Vec<OrderItem>,
    /// 派生字段: Σ(price × quantity)，只由服务端计算
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub customer_name: String,
    pub table_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

// =============================================================================
// API payloads
// =============================================================================

/// Line item input: 引用 + 数量，价格由服务端快照
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub menu_item: String,
    pub quantity: i32,
}

/// Create payload — 必填字段在 handler 层校验
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Option<Vec<OrderItemInput>>,
    pub customer_name: Option<String>,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
}

/// Full line item for updates (价格快照由客户端原样带回)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemUpdate {
    pub menu_item: String,
    pub quantity: i32,
    pub price: f64,
}

/// Update payload — totalAmount 不可由客户端指定；items 变动时服务端重算
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
    pub items: Option<Vec<OrderItemUpdate>>,
}

/// Typed partial update applied by the repository
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

// =============================================================================
// Joined views (响应专用，不落库)
// =============================================================================

/// Line item joined with menu display fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    /// None = 菜单项已被删除，快照仍然有效
    pub menu_item: Option<MenuItemSummary>,
    pub quantity: i32,
    pub price: f64,
}

/// Order with line items joined for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub order_number: String,
    pub items: Vec<OrderItemView>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub customer_name: String,
    pub table_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
