//! # 电影实体定义
//!
//! 电影信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 电影实体
///
/// `playNum` / `commentNum` 为历史遗留列名，由仓储层原子递增。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 标题
    #[sea_orm(unique)]
    pub title: String,
    /// 播放地址
    #[sea_orm(unique)]
    pub url: String,
    /// 简介
    #[sea_orm(column_type = "Text", nullable)]
    pub info: Option<String>,
    /// 封面路径
    #[sea_orm(unique)]
    pub log: Option<String>,
    /// 星级（1-5）
    pub star: i16,
    /// 播放量
    #[sea_orm(column_name = "playNum")]
    pub play_num: i64,
    /// 评论量
    #[sea_orm(column_name = "commentNum")]
    pub comment_num: i64,
    /// 所属标签
    pub tag_id: i32,
    /// 上映地区
    pub area: Option<String>,
    /// 上映时间
    pub release_time: Option<Date>,
    /// 片长（展示字符串）
    pub length: Option<String>,
    /// 添加时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Tag,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::movie_col::Entity")]
    MovieCols,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
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
