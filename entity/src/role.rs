//! # 角色实体定义
//!
//! 历史版本在角色上以字符串存放权限 ID 列表，现已规范化为
//! `role_auth` 关联表。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 角色实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 角色名称
    #[sea_orm(unique)]
    pub name: String,
    /// 添加时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_auth::Entity")]
    RoleAuths,
    #[sea_orm(has_many = "super::admin::Entity")]
    Admins,
}

impl Related<super::role_auth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleAuths.def()
    }
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admins.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
