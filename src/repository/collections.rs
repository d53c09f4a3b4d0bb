//! # 电影收藏仓储
//!
//! 会员与电影之间的收藏关系。重复收藏由 (movie_id, user_id)
//! 唯一索引上报冲突。

use chrono::Utc;
use entity::{movie_col, movie_col::Entity as MovieCol};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::error::{CatalogError, Context, Result};

use super::shared::{Page, PaginationParams, build_page};

/// 电影收藏仓储
pub struct CollectionsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionsRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 收藏电影
    pub async fn add(&self, user_id: i32, movie_id: i32) -> Result<movie_col::Model> {
        let model = movie_col::ActiveModel {
            movie_id: Set(movie_id),
            user_id: Set(user_id),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model
            .insert(self.db)
            .await
            .context("Failed to add movie collection")
    }

    /// 取消收藏
    pub async fn remove(&self, user_id: i32, movie_id: i32) -> Result<()> {
        let result = MovieCol::delete_many()
            .filter(movie_col::Column::UserId.eq(user_id))
            .filter(movie_col::Column::MovieId.eq(movie_id))
            .exec(self.db)
            .await
            .context("Failed to remove movie collection")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found(
                "movie_col",
                format!("user={user_id}, movie={movie_id}"),
            ));
        }
        Ok(())
    }

    /// 查询会员是否已收藏某电影
    pub async fn is_collected(&self, user_id: i32, movie_id: i32) -> Result<bool> {
        let count = MovieCol::find()
            .filter(movie_col::Column::UserId.eq(user_id))
            .filter(movie_col::Column::MovieId.eq(movie_id))
            .count(self.db)
            .await
            .context("Failed to check movie collection")?;

        Ok(count > 0)
    }

    /// 分页列出会员的收藏，收藏时间倒序
    pub async fn list_for_user(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> Result<Page<movie_col::Model>> {
        let select = MovieCol::find().filter(movie_col::Column::UserId.eq(user_id));

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count movie collections")?;

        let items = select
            .order_by_desc(movie_col::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch movie collections")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 统计某电影的被收藏次数
    pub async fn count_for_movie(&self, movie_id: i32) -> Result<u64> {
        MovieCol::find()
            .filter(movie_col::Column::MovieId.eq(movie_id))
            .count(self.db)
            .await
            .context("Failed to count collections for movie")
    }
}
