//! MenuItem Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{MenuItem, MenuItemPatch};
use crate::utils::time::now_millis;

const TABLE: &str = "menu_item";

/// 列表过滤条件 (category 已剔除 "All")
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Paged listing, newest first, with total count of all matches
    pub async fn find_page(
        &self,
        filter: &MenuFilter,
        page: i64,
        limit: i64,
    ) -> RepoResult<(Vec<MenuItem>, i64)> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = $category");
        }
        if filter.is_available.is_some() {
            conditions.push("isAvailable = $is_available");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let start = (page - 1) * limit;
        let list_sql = format!(
            "SELECT * FROM menu_item{where_clause} ORDER BY createdAt DESC LIMIT {limit} START {start}"
        );
        let count_sql = format!("SELECT count() FROM menu_item{where_clause} GROUP ALL");

        let mut query = self.base.db().query(list_sql).query(count_sql);
        if let Some(category) = &filter.category {
            query = query.bind(("category", category.clone()));
        }
        if let Some(is_available) = filter.is_available {
            query = query.bind(("is_available", is_available));
        }

        let mut result = query.await?;
        let items: Vec<MenuItem> = result.take(0)?;
        let total: Option<i64> = result.take((1, "count"))?;

        Ok((items, total.unwrap_or(0)))
    }

    /// Case-insensitive substring search over name, description and
    /// ingredients; 只返回可供应的菜单项
    pub async fn search(&self, q: &str, limit: i64) -> RepoResult<Vec<MenuItem>> {
        let needle = q.to_lowercase();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM menu_item WHERE isAvailable = true AND ( \
                     string::contains(string::lowercase(name), $q) \
                     OR string::contains(string::lowercase(description), $q) \
                     OR string::contains(string::lowercase(array::join(ingredients, ' ')), $q) \
                 ) LIMIT {limit}"
            ))
            .bind(("q", needle))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let record = parse_record_id(TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select(record).await?;
        Ok(item)
    }

    /// Create a new menu item
    pub async fn create(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Partial update; 保存时间戳一并更新
    pub async fn update(&self, id: &str, patch: MenuItemPatch) -> RepoResult<MenuItem> {
        let record = parse_record_id(TABLE, id)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MenuItemMerge<'a> {
            #[serde(flatten)]
            patch: &'a MenuItemPatch,
            updated_at: i64,
        }

        let merge = MenuItemMerge {
            patch: &patch,
            updated_at: now_millis(),
        };

        // Update using MERGE to leave absent fields untouched
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record))
            .bind(("data", serde_json::to_value(&merge).unwrap_or_default()))
            .await?;

        // Fetch the updated record
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Flip the availability flag
    pub async fn toggle_availability(&self, id: &str) -> RepoResult<MenuItem> {
        let record = parse_record_id(TABLE, id)?;

        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET isAvailable = $value, updatedAt = $now RETURN AFTER")
            .bind(("thing", record))
            .bind(("value", !current.is_available))
            .bind(("now", now_millis()))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;

        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete a menu item
    ///
    /// 历史订单保留价格快照，不做级联删除
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record = parse_record_id(TABLE, id)?;
        let deleted: Option<MenuItem> = self.base.db().delete(record).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }
        Ok(())
    }
}
