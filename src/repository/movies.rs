//! # 电影仓储
//!
//! 电影的 CRUD、按标签检索与播放/评论计数的原子递增。

use chrono::{NaiveDate, Utc};
use entity::{movie, movie::Entity as Movie};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;

use crate::error::{CatalogError, Context, Result};

use super::shared::{Page, PaginationParams, build_page};

/// 星级上限
const MAX_STAR: i16 = 5;

/// 创建电影请求
#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub url: String,
    pub info: Option<String>,
    /// 封面路径
    pub log: Option<String>,
    pub star: i16,
    pub tag_id: i32,
    pub area: Option<String>,
    pub release_time: Option<NaiveDate>,
    pub length: Option<String>,
}

/// 更新电影请求（仅覆盖给出的字段）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub info: Option<String>,
    pub log: Option<String>,
    pub star: Option<i16>,
    pub tag_id: Option<i32>,
    pub area: Option<String>,
    pub release_time: Option<NaiveDate>,
    pub length: Option<String>,
}

/// 电影列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub tag_id: Option<i32>,
    pub star: Option<i16>,
    /// 按标题模糊匹配
    pub search: Option<String>,
}

/// 电影仓储
pub struct MoviesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoviesRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 创建电影；标签不存在时由外键约束上报冲突。
    pub async fn create(&self, request: &CreateMovieRequest) -> Result<movie::Model> {
        validate_star(request.star)?;
        if request.title.trim().is_empty() {
            return Err(CatalogError::validation("电影标题不能为空"));
        }

        let model = movie::ActiveModel {
            title: Set(request.title.clone()),
            url: Set(request.url.clone()),
            info: Set(request.info.clone()),
            log: Set(request.log.clone()),
            star: Set(request.star),
            play_num: Set(0),
            comment_num: Set(0),
            tag_id: Set(request.tag_id),
            area: Set(request.area.clone()),
            release_time: Set(request.release_time),
            length: Set(request.length.clone()),
            add_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model
            .insert(self.db)
            .await
            .context("Failed to create movie")
    }

    /// 按 id 获取电影
    pub async fn get(&self, movie_id: i32) -> Result<movie::Model> {
        Movie::find_by_id(movie_id)
            .one(self.db)
            .await
            .context("Failed to fetch movie")?
            .ok_or_else(|| CatalogError::not_found("movie", movie_id))
    }

    /// 按标题获取电影
    pub async fn get_by_title(&self, title: &str) -> Result<movie::Model> {
        Movie::find()
            .filter(movie::Column::Title.eq(title))
            .one(self.db)
            .await
            .context("Failed to fetch movie by title")?
            .ok_or_else(|| CatalogError::not_found("movie", title))
    }

    /// 分页列出电影，添加时间倒序
    pub async fn list(&self, query: &MovieQuery) -> Result<Page<movie::Model>> {
        let params = PaginationParams::new(query.page, query.limit);
        let select = Self::filtered_movies(query);

        let total = select
            .clone()
            .count(self.db)
            .await
            .context("Failed to count movies")?;

        let items = select
            .order_by_desc(movie::Column::AddTime)
            .offset(params.offset())
            .limit(params.limit)
            .all(self.db)
            .await
            .context("Failed to fetch movies")?;

        Ok(Page {
            items,
            pagination: build_page(total, params),
        })
    }

    /// 列出某标签下全部电影，添加时间倒序
    pub async fn list_by_tag(&self, tag_id: i32) -> Result<Vec<movie::Model>> {
        Movie::find()
            .filter(movie::Column::TagId.eq(tag_id))
            .order_by_desc(movie::Column::AddTime)
            .all(self.db)
            .await
            .context("Failed to fetch movies by tag")
    }

    /// 更新电影信息
    pub async fn update(
        &self,
        movie_id: i32,
        request: &UpdateMovieRequest,
    ) -> Result<movie::Model> {
        let movie = self.get(movie_id).await?;
        let mut active_model: movie::ActiveModel = movie.into();

        if let Some(title) = &request.title {
            if title.trim().is_empty() {
                return Err(CatalogError::validation("电影标题不能为空"));
            }
            active_model.title = Set(title.clone());
        }
        if let Some(url) = &request.url {
            active_model.url = Set(url.clone());
        }
        if let Some(info) = &request.info {
            active_model.info = Set(Some(info.clone()));
        }
        if let Some(log) = &request.log {
            active_model.log = Set(Some(log.clone()));
        }
        if let Some(star) = request.star {
            validate_star(star)?;
            active_model.star = Set(star);
        }
        if let Some(tag_id) = request.tag_id {
            active_model.tag_id = Set(tag_id);
        }
        if let Some(area) = &request.area {
            active_model.area = Set(Some(area.clone()));
        }
        if let Some(release_time) = request.release_time {
            active_model.release_time = Set(Some(release_time));
        }
        if let Some(length) = &request.length {
            active_model.length = Set(Some(length.clone()));
        }

        active_model
            .update(self.db)
            .await
            .context("Failed to update movie")
    }

    /// 删除电影；其评论与收藏随之级联删除。
    pub async fn delete(&self, movie_id: i32) -> Result<()> {
        let result = Movie::delete_by_id(movie_id)
            .exec(self.db)
            .await
            .context("Failed to delete movie")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("movie", movie_id));
        }
        Ok(())
    }

    /// 播放量 +1（SQL 层原子递增，不经过读-改-写）
    pub async fn increment_play_num(&self, movie_id: i32) -> Result<()> {
        self.increment_counter(movie_id, movie::Column::PlayNum)
            .await
    }

    /// 评论量 +1
    pub async fn increment_comment_num(&self, movie_id: i32) -> Result<()> {
        self.increment_counter(movie_id, movie::Column::CommentNum)
            .await
    }

    async fn increment_counter(&self, movie_id: i32, column: movie::Column) -> Result<()> {
        let result = Movie::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(movie::Column::Id.eq(movie_id))
            .exec(self.db)
            .await
            .context("Failed to increment movie counter")?;

        if result.rows_affected == 0 {
            return Err(CatalogError::not_found("movie", movie_id));
        }
        Ok(())
    }

    fn filtered_movies(query: &MovieQuery) -> sea_orm::Select<Movie> {
        let mut select = Movie::find();

        if let Some(tag_id) = query.tag_id {
            select = select.filter(movie::Column::TagId.eq(tag_id));
        }
        if let Some(star) = query.star {
            select = select.filter(movie::Column::Star.eq(star));
        }
        if let Some(search) = query
            .search
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            select = select.filter(movie::Column::Title.like(format!("%{search}%")));
        }

        select
    }
}

fn validate_star(star: i16) -> Result<()> {
    if !(0..=MAX_STAR).contains(&star) {
        return Err(CatalogError::validation(format!(
            "星级必须在 0 到 {MAX_STAR} 之间: {star}"
        )));
    }
    Ok(())
}
