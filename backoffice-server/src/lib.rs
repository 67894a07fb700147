//! Restaurant Back-Office Server - 餐厅后台管理服务
//!
//! # 架构概述
//!
//! 本模块是后台服务的主入口，提供以下核心功能：
//!
//! - **菜单管理** (`api/menu`): 菜单项 CRUD、搜索、供应状态切换
//! - **订单管理** (`api/orders`): 订单创建、状态流转、价格快照
//! - **销量报表** (`api/analytics`): Top-seller 聚合统计
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//!
//! # 模块结构
//!
//! ```text
//! backoffice-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models, repository, seed)
//! ├── money/         # 订单金额计算 (Decimal 精度)
//! └── utils/         # 错误、日志、校验等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod money;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResponse, AppResult, Pagination};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __      ____  _________
   / __ )____ ______/ /__   / __ \/ __/ __(_)_______
  / __  / __ `/ ___/ //_/  / / / / /_/ /_/ / ___/ _ \
 / /_/ / /_/ / /__/ ,<    / /_/ / __/ __/ / /__/  __/
/_____/\__,_/\___/_/|_|   \____/_/ /_/ /_/\___/\___/
    "#
    );
}
