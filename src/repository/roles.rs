//! # 角色仓储
//!
//! 角色及其权限授予。授权以规范化的 `role_auth` 关联表存储，
//! 替代历史版本在角色上以字符串存放权限 ID 列表的做法。

use chrono::Utc;
use entity::{auth, role, role::Entity as Role, role_auth, role_auth::Entity as RoleAuth};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::error::{CatalogError, Context, Result};

/// 角色仓储
pub struct RolesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RolesRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建角色并授予权限；任一权限不存在时整体回滚。
    pub async fn create(&self, name: &str, auth_ids: &[i32]) -> Result<role::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("角色名称不能为空"));
        }

        let txn = self
            .db
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let model = role::ActiveModel {
            name: Set(name.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let created = model.insert(&txn).await.context("Failed to create role")?;

        Self::insert_grants(&txn, created.id, auth_ids).await?;

        txn.commit().await.context("Failed to commit transaction")?;
        Ok(created)
    }

    /// 按 id 获取角色
    pub async fn get(&self, role_id: i32) -> Result<role::Model> {
        Role::find_by_id(role_id)
            .one(self.db)
            .await
            .context("Failed to fetch role")?
            .ok_or_else(|| CatalogError::not_found("role", role_id))
    }

    /// 列出全部角色，添加时间倒序
    pub async fn list(&self) -> Result<Vec<role::Model>> {
        Role::find()
            .order_by_desc(role::Column::AddTime)
            .all(self.db)
            .await
            .context("Failed to fetch roles")
    }

    /// 重命名角色
    pub async fn rename(&self, role_id: i32, name: &str) -> Result<role::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("角色名称不能为空"));
        }

        let role = self.get(role_id).await?;
        let mut active_model: role::ActiveModel = role.into();
        active_model.name = Set(name.to_string());

        active_model
            .update(self.db)
            .await
            .context("Failed to rename role")
    }

    /// 整体替换角色的权限授予
    pub async fn set_auths(&self, role_id: i32, auth_ids: &[i32]) -> Result<()> {
        // 先确认角色存在，避免对不存在的角色静默成功
        self.get(role_id).await?;

        let txn = self
            .db
            .begin()
            .await
            .context("Failed to begin transaction")?;

        RoleAuth::delete_many()
            .filter(role_auth::Column::RoleId.eq(role_id))
            .exec(&txn)
            .await
            .context("Failed to clear role grants")?;

        Self::insert_grants(&txn, role_id, auth_ids).await?;

        txn.commit().await.context("Failed to commit transaction")?;
        Ok(())
    }

    /// 列出角色被授予的全部权限
    pub async fn list_auths(&self, role_id: i32) -> Result<Vec<auth::Model>> {
        let grants = RoleAuth::find()
            .filter(role_auth::Column::RoleId.eq(role_id))
            .find_also_related(auth::Entity)
            .all(self.db)
            .await
            .context("Failed to fetch role grants")?;

        Ok(grants.into_iter().filter_map(|(_, auth)| auth).collect())
    }

    /// 删除角色；仍有管理员属于该角色时由外键 Restrict 上报冲突。
    pub async fn delete(&self, role_id: i32) -> Result<()> {
        let result = Role::delete_by_id(role_id)
            .exec(self.db)
            .await
            .context("Failed to delete role")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("role", role_id));
        }
        Ok(())
    }

    async fn insert_grants<C: ConnectionTrait>(
        conn: &C,
        role_id: i32,
        auth_ids: &[i32],
    ) -> Result<()> {
        for &auth_id in auth_ids {
            let grant = role_auth::ActiveModel {
                role_id: Set(role_id),
                auth_id: Set(auth_id),
                add_time: Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            grant
                .insert(conn)
                .await
                .context("Failed to grant auth to role")?;
        }
        Ok(())
    }
}
