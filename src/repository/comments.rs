//! # 评论仓储
//!
//! 评论创建与电影评论计数在同一事务内完成。

use chrono::Utc;
use entity::{comment, comment::Entity as Comment, movie};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::error::{CatalogError, Context, Result};

use super::shared::{Page, PaginationParams, build_page};

/// 评论仓储
pub struct CommentsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 发表评论并递增所属电影的评论量。
    ///
    /// 电影或会员不存在时由外键约束上报冲突，事务回滚。
    pub async fn create(
        &self,
        movie_id: i32,
        user_id: i32,
        content: &str,
    ) -> Result<comment::Model> {
        if content.trim().is_empty() {
            return Err(CatalogError::validation("评论内容不能为空"));
        }

        let txn = self
            .db
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let model = comment::ActiveModel {
            content: Set(content.to_string()),
            movie_id: Set(movie_id),
            user_id: Set(user_id),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .context("Failed to create comment")?;

        movie::Entity::update_many()
            .col_expr(
                movie::Column::CommentNum,
                Expr::col(movie::Column::CommentNum).add(1),
            )
            .filter(movie::Column::Id.eq(movie_id))
            .exec(&txn)
            .await
            .context("Failed to increment movie comment count")?;

        txn.commit().await.context("Failed to commit transaction")?;
        Ok(created)
    }

    /// 按 id 获取评论
    pub async fn get(&self, comment_id: i32) -> Result<comment::Model> {
        Comment::find_by_id(comment_id)
            .one(self.db)
            .await
            .context("Failed to fetch comment")?
            .ok_or_else(|| CatalogError::not_found("comment", comment_id))
    }

    /// 分页列出某电影的评论，添加时间倒序
    pub async fn list_for_movie(
        &self,
        movie_id: i32,
        params: PaginationParams,
    ) -> Result<Page<comment::Model>> {
        self.list_filtered(comment::Column::MovieId.eq(movie_id), params)
            .await
    }

    /// 分页列出某会员的评论，添加时间倒序
    pub async fn list_for_user(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<comment::Model>> {
        self.list_filtered(comment::Column::UserId.eq(user_id), params)
            .await
    }

    /// 删除评论
    pub async fn delete(&self, comment_id: i32) -> Result<()> {
        let result = Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await
            .context("Failed to delete comment")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("comment", comment_id));
        }
        Ok(())
    }

    async fn list_filtered(
        &self,
        condition: sea_orm::sea_query::SimpleExpr,
        params: PaginationParams,
    ) -> Result<Page<comment::Model>> {
        let select = Comment::find().filter(condition);

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count comments")?;

        let items = select
            .order_by_desc(comment::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch comments")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }
}
