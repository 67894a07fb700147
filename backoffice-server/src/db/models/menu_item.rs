//! MenuItem Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::time::now_millis;

pub type MenuItemId = RecordId;

/// 菜单分类 — 固定枚举，wire 格式即展示名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [&'static str; 4] = ["Appetizer", "Main Course", "Dessert", "Beverage"];

    /// Parse a wire string into the enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Appetizer" => Some(Self::Appetizer),
            "Main Course" => Some(Self::MainCourse),
            "Dessert" => Some(Self::Dessert),
            "Beverage" => Some(Self::Beverage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: f64,
    /// 配料表，保持录入顺序
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// 准备时间 (分钟)
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

fn default_preparation_time() -> i32 {
    15
}

fn default_image_url() -> String {
    "/foodplaceholder.png".to_string()
}

impl MenuItem {
    pub fn new(name: String, category: Category, price: f64) -> Self {
        let now = now_millis();
        Self {
            id: None,
            name,
            description: String::new(),
            category,
            price,
            ingredients: Vec::new(),
            is_available: true,
            preparation_time: default_preparation_time(),
            image_url: default_image_url(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Create payload — 必填字段在 handler 层校验，缺失时报 400
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub preparation_time: Option<i32>,
    pub image_url: Option<String>,
}

/// Update payload (wire 格式，category 待校验)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub preparation_time: Option<i32>,
    pub image_url: Option<String>,
}

/// Typed partial update applied by the repository
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Display fields joined into order line items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemSummary {
    #[serde(with = "serde_helpers::record_id")]
    pub id: MenuItemId,
    pub name: String,
    pub category: Category,
    /// 当前实时价格，仅供展示；订单内金额以快照为准
    pub price: f64,
    pub image_url: String,
}
