//! # 上映预告实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 上映预告实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "preview")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 标题
    #[sea_orm(unique)]
    pub title: String,
    /// 封面路径
    #[sea_orm(unique)]
    pub logo: String,
    /// 添加时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
