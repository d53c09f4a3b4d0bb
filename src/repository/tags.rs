//! # 标签仓储

use chrono::Utc;
use entity::{tag, tag::Entity as Tag};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::error::{CatalogError, Context, Result};

/// 标签仓储
pub struct TagsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建标签，重名由唯一约束上报冲突。
    pub async fn create(&self, name: &str) -> Result<tag::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("标签名称不能为空"));
        }

        let model = tag::ActiveModel {
            name: Set(name.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await.context("Failed to create tag")
    }

    /// 按 id 获取标签
    pub async fn get(&self, tag_id: i32) -> Result<tag::Model> {
        Tag::find_by_id(tag_id)
            .one(self.db)
            .await
            .context("Failed to fetch tag")?
            .ok_or_else(|| CatalogError::not_found("tag", tag_id))
    }

    /// 按名称获取标签
    pub async fn get_by_name(&self, name: &str) -> Result<tag::Model> {
        Tag::find()
            .filter(tag::Column::Name.eq(name))
            .one(self.db)
            .await
            .context("Failed to fetch tag by name")?
            .ok_or_else(|| CatalogError::not_found("tag", name))
    }

    /// 列出全部标签，添加时间倒序
    pub async fn list(&self) -> Result<Vec<tag::Model>> {
        Tag::find()
            .order_by_desc(tag::Column::AddTime)
            .all(self.db)
            .await
            .context("Failed to fetch tags")
    }

    /// 重命名标签
    pub async fn rename(&self, tag_id: i32, name: &str) -> Result<tag::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("标签名称不能为空"));
        }

        let tag = self.get(tag_id).await?;
        let mut active_model: tag::ActiveModel = tag.into();
        active_model.name = Set(name.to_string());

        active_model
            .update(self.db)
            .await
            .context("Failed to rename tag")
    }

    /// 删除标签；仍被电影引用时由外键 Restrict 上报冲突。
    pub async fn delete(&self, tag_id: i32) -> Result<()> {
        let result = Tag::delete_by_id(tag_id)
            .exec(self.db)
            .await
            .context("Failed to delete tag")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("tag", tag_id));
        }
        Ok(())
    }
}
