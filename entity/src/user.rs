//! # 会员实体定义
//!
//! 会员基础信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 会员实体
///
/// `createTime` 为历史遗留列名，注册后不再变更。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 昵称
    #[sea_orm(unique)]
    pub name: String,
    /// 密码（bcrypt 哈希）
    pub pwd: String,
    /// 邮箱
    #[sea_orm(unique)]
    pub email: String,
    /// 手机号码
    #[sea_orm(unique)]
    pub phone: String,
    /// 个性简介
    #[sea_orm(column_type = "Text", nullable)]
    pub info: Option<String>,
    /// 头像路径
    #[sea_orm(unique)]
    pub face: Option<String>,
    /// 注册时间
    #[sea_orm(column_name = "createTime")]
    pub create_time: DateTime,
    /// 唯一标识符
    #[sea_orm(unique)]
    pub uuid: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_log::Entity")]
    UserLogs,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::movie_col::Entity")]
    MovieCols,
}

impl Related<super::user_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLogs.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::movie_col::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCols.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
