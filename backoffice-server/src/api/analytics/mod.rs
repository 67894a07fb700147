//! Analytics API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", analytics_routes())
}

fn analytics_routes() -> Router<ServerState> {
    Router::new().route("/top-sellers", get(handler::top_sellers))
}
