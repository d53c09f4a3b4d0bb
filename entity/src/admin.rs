//! # 管理员实体定义
//!
//! 管理员账号表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 超级管理员的历史存储约定：`is_super` 为 0 表示超级管理员。
pub const IS_SUPER_ADMIN: i16 = 0;

/// 普通管理员的 `is_super` 存储值。
pub const IS_NORMAL_ADMIN: i16 = 1;

/// 管理员实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 管理员帐号
    #[sea_orm(unique)]
    pub name: String,
    /// 管理员密码（bcrypt 哈希）
    pub pwd: String,
    /// 是否为超级管理员，0 为超级管理员（历史约定，读取请用
    /// [`Model::is_super_admin`]）
    pub is_super: i16,
    /// 所属角色
    pub role_id: i32,
    /// 添加时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

impl Model {
    /// 以正常语义暴露超级管理员标志，避免历史反转约定外泄。
    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        self.is_super == IS_SUPER_ADMIN
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Role,
    #[sea_orm(has_many = "super::admin_log::Entity")]
    AdminLogs,
    #[sea_orm(has_many = "super::op_log::Entity")]
    OpLogs,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::admin_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminLogs.def()
    }
}

impl Related<super::op_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
