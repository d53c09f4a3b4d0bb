//! # 会员登录日志实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 会员登录日志实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 所属会员
    pub user_id: i32,
    /// 登录 IP
    pub ip: String,
    /// 登录时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
