//! Seed API 模块 (开发工具)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/seed", get(handler::seed))
}
