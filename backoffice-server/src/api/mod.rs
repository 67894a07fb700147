//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`orders`] - 订单管理接口
//! - [`analytics`] - 销量报表接口
//! - [`seed`] - 开发环境数据填充

pub mod analytics;
pub mod health;
pub mod menu;
pub mod orders;
pub mod seed;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
