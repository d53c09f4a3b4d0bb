//! # 权限实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 权限实体
///
/// `url` 为该权限守卫的路由地址。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "auth")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 权限名称
    #[sea_orm(unique)]
    pub name: String,
    /// 守卫的路由地址
    #[sea_orm(unique)]
    pub url: String,
    /// 添加时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_auth::Entity")]
    RoleAuths,
}

impl Related<super::role_auth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleAuths.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
