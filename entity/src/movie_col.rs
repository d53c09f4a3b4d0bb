//! # 电影收藏实体定义
//!
//! 会员与电影的收藏关系，带自身主键与时间戳的关联行。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 电影收藏实体
///
/// (movie_id, user_id) 组合唯一，同一会员对同一电影仅收藏一次。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_col")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 所属电影
    pub movie_id: i32,
    /// 所属会员
    pub user_id: i32,
    /// 收藏时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
