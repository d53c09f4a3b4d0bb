//! # 角色-权限关联实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 角色-权限关联实体
///
/// (role_id, auth_id) 组合唯一。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_auth")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 所属角色
    pub role_id: i32,
    /// 授予的权限
    pub auth_id: i32,
    /// 授权时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Role,
    #[sea_orm(
        belongs_to = "super::auth::Entity",
        from = "Column::AuthId",
        to = "super::auth::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Auth,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::auth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auth.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
