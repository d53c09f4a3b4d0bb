//! # 上映预告仓储

use chrono::Utc;
use entity::{preview, preview::Entity as Preview};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;

use crate::error::{CatalogError, Context, Result};

use super::shared::{Page, PaginationParams, build_page};

/// 更新预告请求（仅覆盖给出的字段）
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePreviewRequest {
    pub title: Option<String>,
    pub logo: Option<String>,
}

/// 上映预告仓储
pub struct PreviewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreviewsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建预告
    pub async fn create(&self, title: &str, logo: &str) -> Result<preview::Model> {
        if title.trim().is_empty() {
            return Err(CatalogError::validation("预告标题不能为空"));
        }

        let model = preview::ActiveModel {
            title: Set(title.to_string()),
            logo: Set(logo.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model
            .insert(self.db)
            .await
            .context("Failed to create preview")
    }

    /// 按 id 获取预告
    pub async fn get(&self, preview_id: i32) -> Result<preview::Model> {
        Preview::find_by_id(preview_id)
            .one(self.db)
            .await
            .context("Failed to fetch preview")?
            .ok_or_else(|| CatalogError::not_found("preview", preview_id))
    }

    /// 分页列出预告，添加时间倒序
    pub async fn list(&self, params: PaginationParams) -> Result<Page<preview::Model>> {
        let total = Preview::find()
            .count(self.db)
            .await
            .context("Failed to count previews")?;

        let items = Preview::find()
            .order_by_desc(preview::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch previews")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 更新预告
    pub async fn update(
        &self,
        preview_id: i32,
        request: &UpdatePreviewRequest,
    ) -> Result<preview::Model> {
        let preview = self.get(preview_id).await?;
        let mut active_model: preview::ActiveModel = preview.into();

        if let Some(title) = &request.title {
            if title.trim().is_empty() {
                return Err(CatalogError::validation("预告标题不能为空"));
            }
            active_model.title = Set(title.clone());
        }
        if let Some(logo) = &request.logo {
            active_model.logo = Set(logo.clone());
        }

        active_model
            .update(self.db)
            .await
            .context("Failed to update preview")
    }

    /// 删除预告
    pub async fn delete(&self, preview_id: i32) -> Result<()> {
        let result = Preview::delete_by_id(preview_id)
            .exec(self.db)
            .await
            .context("Failed to delete preview")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("preview", preview_id));
        }
        Ok(())
    }
}
