//! # 权限仓储

use chrono::Utc;
use entity::{auth, auth::Entity as Auth};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::Deserialize;

use crate::error::{CatalogError, Context, Result};

/// 更新权限请求（仅覆盖给出的字段）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAuthRequest {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// 权限仓储
pub struct AuthsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建权限
    pub async fn create(&self, name: &str, url: &str) -> Result<auth::Model> {
        if name.trim().is_empty() || url.trim().is_empty() {
            return Err(CatalogError::validation("权限名称和地址不能为空"));
        }

        let model = auth::ActiveModel {
            name: Set(name.to_string()),
            url: Set(url.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await.context("Failed to create auth")
    }

    /// 按 id 获取权限
    pub async fn get(&self, auth_id: i32) -> Result<auth::Model> {
        Auth::find_by_id(auth_id)
            .one(self.db)
            .await
            .context("Failed to fetch auth")?
            .ok_or_else(|| CatalogError::not_found("auth", auth_id))
    }

    /// 列出全部权限，添加时间倒序
    pub async fn list(&self) -> Result<Vec<auth::Model>> {
        Auth::find()
            .order_by_desc(auth::Column::AddTime)
            .all(self.db)
            .await
            .context("Failed to fetch auths")
    }

    /// 更新权限
    pub async fn update(&self, auth_id: i32, request: &UpdateAuthRequest) -> Result<auth::Model> {
        let auth = self.get(auth_id).await?;
        let mut active_model: auth::ActiveModel = auth.into();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(CatalogError::validation("权限名称不能为空"));
            }
            active_model.name = Set(name.clone());
        }
        if let Some(url) = &request.url {
            if url.trim().is_empty() {
                return Err(CatalogError::validation("权限地址不能为空"));
            }
            active_model.url = Set(url.clone());
        }

        active_model
            .update(self.db)
            .await
            .context("Failed to update auth")
    }

    /// 删除权限；角色授权行随之级联删除。
    pub async fn delete(&self, auth_id: i32) -> Result<()> {
        let result = Auth::delete_by_id(auth_id)
            .exec(self.db)
            .await
            .context("Failed to delete auth")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("auth", auth_id));
        }
        Ok(())
    }
}
