//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.
//!
//! # ID Convention: 全栈统一使用 "table:id" 格式
//!
//! 使用 surrealdb::RecordId 处理所有 ID：
//!   - 解析: [`parse_record_id`] (接受 "menu_item:abc" 或纯 "abc")
//!   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

pub mod menu_item;
pub mod order;

// Re-exports
pub use menu_item::{MenuFilter, MenuItemRepository};
pub use order::{OrderFilter, OrderRepository, TopSellerRow};

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse an id that may carry the table prefix ("menu_item:abc" or bare "abc")
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    match id.strip_prefix(&format!("{table}:")) {
        // full "table:key" form, let the parser handle escaped keys
        Some(key) if !key.is_empty() => id
            .parse::<RecordId>()
            .map_err(|_| RepoError::Validation(format!("Invalid {table} id: {id}"))),
        Some(_) => Err(RepoError::Validation(format!("Invalid {table} id: {id}"))),
        None if !id.is_empty() => Ok(RecordId::from_table_key(table, id)),
        None => Err(RepoError::Validation(format!("Invalid {table} id: {id}"))),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
