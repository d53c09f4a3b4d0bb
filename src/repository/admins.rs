//! # 管理员仓储
//!
//! 管理员账号、凭证校验与登录/操作审计日志。
//!
//! 存储层沿用历史约定 `is_super == 0` 表示超级管理员；对外
//! 一律通过 [`AdminInfo::is_super_admin`] 暴露正常语义的布尔值。

use chrono::Utc;
use entity::{
    admin, admin::Entity as Admin, admin_log, admin_log::Entity as AdminLog, op_log,
    op_log::Entity as OpLog,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Context, Result};

use super::password::{check_password, hash_password};
use super::shared::{Page, PaginationParams, build_page};

/// 创建管理员请求
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub name: String,
    pub password: String,
    pub is_super_admin: bool,
    pub role_id: i32,
}

/// 管理员响应（不含密码哈希）
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: i32,
    pub name: String,
    pub is_super_admin: bool,
    pub role_id: i32,
    pub add_time: chrono::NaiveDateTime,
}

impl From<admin::Model> for AdminInfo {
    fn from(model: admin::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            is_super_admin: model.is_super_admin(),
            role_id: model.role_id,
            add_time: model.add_time,
        }
    }
}

/// 管理员仓储
pub struct AdminsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建管理员，密码以 bcrypt 哈希落库。
    pub async fn create(&self, request: &CreateAdminRequest) -> Result<AdminInfo> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::validation("管理员帐号不能为空"));
        }
        if request.password.len() < 6 {
            return Err(CatalogError::validation("密码长度不能少于 6 位"));
        }

        let is_super = if request.is_super_admin {
            admin::IS_SUPER_ADMIN
        } else {
            admin::IS_NORMAL_ADMIN
        };

        let model = admin::ActiveModel {
            name: Set(request.name.clone()),
            pwd: Set(hash_password(&request.password)?),
            is_super: Set(is_super),
            role_id: Set(request.role_id),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let created = model
            .insert(self.db)
            .await
            .context("Failed to create admin")?;
        Ok(created.into())
    }

    /// 按 id 获取管理员
    pub async fn get(&self, admin_id: i32) -> Result<AdminInfo> {
        Ok(self.fetch_admin(admin_id).await?.into())
    }

    /// 按帐号获取管理员
    pub async fn get_by_name(&self, name: &str) -> Result<AdminInfo> {
        Ok(self.fetch_admin_by_name(name).await?.into())
    }

    /// 分页列出管理员，添加时间倒序
    pub async fn list(&self, params: PaginationParams) -> Result<Page<AdminInfo>> {
        let total = Admin::find()
            .count(self.db)
            .await
            .context("Failed to count admins")?;

        let items = Admin::find()
            .order_by_desc(admin::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch admins")?
            .into_iter()
            .map(AdminInfo::from)
            .collect();

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 凭证校验：帐号不存在返回 NotFound；密码不匹配返回 `Ok(None)`。
    pub async fn verify_password(&self, name: &str, password: &str) -> Result<Option<AdminInfo>> {
        let admin = self.fetch_admin_by_name(name).await?;
        if check_password(&admin.pwd, password)? {
            Ok(Some(admin.into()))
        } else {
            Ok(None)
        }
    }

    /// 修改密码，需先校验当前密码。
    pub async fn change_password(
        &self,
        admin_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        if new_password.len() < 6 {
            return Err(CatalogError::validation("密码长度不能少于 6 位"));
        }

        let admin = self.fetch_admin(admin_id).await?;
        if !check_password(&admin.pwd, current_password)? {
            return Err(CatalogError::validation("当前密码不正确"));
        }

        let mut active_model: admin::ActiveModel = admin.into();
        active_model.pwd = Set(hash_password(new_password)?);
        active_model
            .update(self.db)
            .await
            .context("Failed to change admin password")?;
        Ok(())
    }

    /// 按帐号重置密码（运维通道，不校验旧密码）。
    pub async fn reset_password(&self, name: &str, new_password: &str) -> Result<()> {
        if new_password.len() < 6 {
            return Err(CatalogError::validation("密码长度不能少于 6 位"));
        }

        let admin = self.fetch_admin_by_name(name).await?;
        let mut active_model: admin::ActiveModel = admin.into();
        active_model.pwd = Set(hash_password(new_password)?);

        active_model
            .update(self.db)
            .await
            .context("Failed to reset admin password")?;
        Ok(())
    }

    /// 删除管理员；存在操作审计记录时由外键 Restrict 上报冲突，
    /// 登录日志随之级联删除。
    pub async fn delete(&self, admin_id: i32) -> Result<()> {
        let result = Admin::delete_by_id(admin_id)
            .exec(self.db)
            .await
            .context("Failed to delete admin")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("admin", admin_id));
        }
        Ok(())
    }

    /// 记录一次管理员登录
    pub async fn record_login(&self, admin_id: i32, ip: &str) -> Result<admin_log::Model> {
        let log = admin_log::ActiveModel {
            admin_id: Set(admin_id),
            ip: Set(ip.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db)
            .await
            .context("Failed to record admin login")
    }

    /// 记录一次管理端操作（审计）
    pub async fn record_operation(
        &self,
        admin_id: i32,
        ip: &str,
        reason: &str,
    ) -> Result<op_log::Model> {
        let log = op_log::ActiveModel {
            admin_id: Set(admin_id),
            ip: Set(ip.to_string()),
            reason: Set(reason.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db)
            .await
            .context("Failed to record admin operation")
    }

    /// 分页列出管理员登录日志，登录时间倒序
    pub async fn list_logins(
        &self,
        admin_id: i32,
        params: PaginationParams,
    ) -> Result<Page<admin_log::Model>> {
        let select = AdminLog::find().filter(admin_log::Column::AdminId.eq(admin_id));

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count admin logins")?;

        let items = select
            .order_by_desc(admin_log::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch admin logins")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 分页列出管理员操作日志，操作时间倒序
    pub async fn list_operations(
        &self,
        admin_id: i32,
        params: PaginationParams,
    ) -> Result<Page<op_log::Model>> {
        let select = OpLog::find().filter(op_log::Column::AdminId.eq(admin_id));

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count admin operations")?;

        let items = select
            .order_by_desc(op_log::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch admin operations")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    async fn fetch_admin(&self, admin_id: i32) -> Result<admin::Model> {
        Admin::find_by_id(admin_id)
            .one(self.db)
            .await
            .context("Failed to fetch admin")?
            .ok_or_else(|| CatalogError::not_found("admin", admin_id))
    }

    async fn fetch_admin_by_name(&self, name: &str) -> Result<admin::Model> {
        Admin::find()
            .filter(admin::Column::Name.eq(name))
            .one(self.db)
            .await
            .context("Failed to fetch admin by name")?
            .ok_or_else(|| CatalogError::not_found("admin", name))
    }
}
