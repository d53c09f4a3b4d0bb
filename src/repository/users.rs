//! # 会员仓储
//!
//! 会员的 CRUD、登录校验与登录日志记录。

use chrono::Utc;
use entity::{user, user::Entity as User, user_log, user_log::Entity as UserLog};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{CatalogError, Context, Result};

use super::password::{check_password, hash_password};
use super::shared::{Page, PaginationParams, build_page};

/// 创建会员请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub info: Option<String>,
    pub face: Option<String>,
}

/// 更新会员请求（仅覆盖给出的字段）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub info: Option<String>,
    pub face: Option<String>,
}

/// 会员列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// 按昵称或邮箱模糊匹配
    pub search: Option<String>,
}

/// 会员仓储
pub struct UsersRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsersRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 注册会员，密码以 bcrypt 哈希落库，uuid 由本层生成。
    pub async fn create(&self, request: &CreateUserRequest) -> Result<user::Model> {
        validate_new_user_input(request)?;

        let model = user::ActiveModel {
            name: Set(request.name.clone()),
            pwd: Set(hash_password(&request.password)?),
            email: Set(request.email.clone()),
            phone: Set(request.phone.clone()),
            info: Set(request.info.clone()),
            face: Set(request.face.clone()),
            create_time: Set(Utc::now().naive_utc()),
            uuid: Set(Uuid::new_v4().to_string()),
            ..Default::default()
        };

        model.insert(self.db).await.context("Failed to create user")
    }

    /// 按 id 获取会员
    pub async fn get(&self, user_id: i32) -> Result<user::Model> {
        User::find_by_id(user_id)
            .one(self.db)
            .await
            .context("Failed to fetch user")?
            .ok_or_else(|| CatalogError::not_found("user", user_id))
    }

    /// 按昵称获取会员
    pub async fn get_by_name(&self, name: &str) -> Result<user::Model> {
        User::find()
            .filter(user::Column::Name.eq(name))
            .one(self.db)
            .await
            .context("Failed to fetch user by name")?
            .ok_or_else(|| CatalogError::not_found("user", name))
    }

    /// 按 uuid 获取会员
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<user::Model> {
        User::find()
            .filter(user::Column::Uuid.eq(uuid))
            .one(self.db)
            .await
            .context("Failed to fetch user by uuid")?
            .ok_or_else(|| CatalogError::not_found("user", uuid))
    }

    /// 分页列出会员，注册时间倒序
    pub async fn list(&self, query: &UserQuery) -> Result<Page<user::Model>> {
        let params = PaginationParams::new(query.page, query.limit);

        let mut select = User::find();
        if let Some(search) = query
            .search
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            let pattern = format!("%{search}%");
            select = select.filter(
                user::Column::Name
                    .like(&pattern)
                    .or(user::Column::Email.like(&pattern)),
            );
        }

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count users")?;

        let items = select
            .order_by_desc(user::Column::CreateTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch users")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 更新会员资料，唯一字段冲突由存储层约束上报。
    pub async fn update(&self, user_id: i32, request: &UpdateUserRequest) -> Result<user::Model> {
        let user = self.get(user_id).await?;
        let mut active_model: user::ActiveModel = user.into();

        if let Some(name) = &request.name {
            validate_non_empty("昵称", name)?;
            active_model.name = Set(name.clone());
        }
        if let Some(email) = &request.email {
            validate_email(email)?;
            active_model.email = Set(email.clone());
        }
        if let Some(phone) = &request.phone {
            validate_phone(phone)?;
            active_model.phone = Set(phone.clone());
        }
        if let Some(info) = &request.info {
            active_model.info = Set(Some(info.clone()));
        }
        if let Some(face) = &request.face {
            active_model.face = Set(Some(face.clone()));
        }

        active_model
            .update(self.db)
            .await
            .context("Failed to update user")
    }

    /// 修改密码，需先校验当前密码。
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        validate_password(new_password)?;

        let user = self.get(user_id).await?;
        if !check_password(&user.pwd, current_password)? {
            return Err(CatalogError::validation("当前密码不正确"));
        }

        let mut active_model: user::ActiveModel = user.into();
        active_model.pwd = Set(hash_password(new_password)?);
        active_model
            .update(self.db)
            .await
            .context("Failed to change password")?;

        Ok(())
    }

    /// 删除会员；其登录日志、评论、收藏随之级联删除。
    pub async fn delete(&self, user_id: i32) -> Result<()> {
        let result = User::delete_by_id(user_id)
            .exec(self.db)
            .await
            .context("Failed to delete user")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("user", user_id));
        }
        Ok(())
    }

    /// 登录校验：昵称不存在返回 NotFound；密码不匹配返回 `Ok(None)`。
    pub async fn verify_password(&self, name: &str, password: &str) -> Result<Option<user::Model>> {
        let user = self.get_by_name(name).await?;
        if check_password(&user.pwd, password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// 记录一次登录
    pub async fn record_login(&self, user_id: i32, ip: &str) -> Result<user_log::Model> {
        let log = user_log::ActiveModel {
            user_id: Set(user_id),
            ip: Set(ip.to_string()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db)
            .await
            .context("Failed to record user login")
    }

    /// 分页列出登录日志，登录时间倒序
    pub async fn list_logins(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<user_log::Model>> {
        let select = UserLog::find().filter(user_log::Column::UserId.eq(user_id));

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count user logins")?;

        let items = select
            .order_by_desc(user_log::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch user logins")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }
}

fn validate_new_user_input(request: &CreateUserRequest) -> Result<()> {
    validate_non_empty("昵称", &request.name)?;
    validate_email(&request.email)?;
    validate_phone(&request.phone)?;
    validate_password(&request.password)?;
    Ok(())
}

fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(format!("{field}不能为空")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    validate_non_empty("邮箱", email)?;
    if !email.contains('@') {
        return Err(CatalogError::validation(format!("邮箱格式不正确: {email}")));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<()> {
    validate_non_empty("手机号码", phone)?;
    if phone.len() > 11 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(CatalogError::validation(format!(
            "手机号码格式不正确: {phone}"
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(CatalogError::validation("密码长度不能少于 6 位"));
    }
    Ok(())
}
