//! # 操作日志实体定义
//!
//! 管理端操作审计记录。审计行必须保留，所属管理员在存在
//! 操作记录时不可删除（外键 Restrict）。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 操作日志实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "op_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 所属管理员
    pub admin_id: i32,
    /// 操作来源 IP
    pub ip: String,
    /// 操作原因
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    /// 操作时间
    #[sea_orm(column_name = "addTime")]
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::AdminId",
        to = "super::admin::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Admin,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
