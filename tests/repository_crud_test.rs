//! 仓储 CRUD 集成测试
//!
//! 字段往返、列表过滤、分页与计数递增。

use migration::{Migrator, MigratorTrait};
use movie_catalog::repository::{
    CommentsRepository, CreateMovieRequest, CreateUserRequest, MovieQuery, MoviesRepository,
    PaginationParams, PreviewsRepository, TagsRepository, UpdateMovieRequest,
    UpdatePreviewRequest, UpdateUserRequest, UsersRepository,
};
use pretty_assertions::assert_eq;
use sea_orm::{Database, DatabaseConnection};

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

async fn create_tag(db: &DatabaseConnection, name: &str) -> i32 {
    TagsRepository::new(db)
        .create(name)
        .await
        .expect("create tag")
        .id
}

#[tokio::test]
async fn movie_round_trip_preserves_fields() {
    let db = setup_test_db().await;
    let movies = MoviesRepository::new(&db);
    let tag_id = create_tag(&db, "剧情").await;

    let request = CreateMovieRequest {
        title: "肖申克的救赎".to_string(),
        url: "/movie/shawshank.mp4".to_string(),
        info: Some("含冤入狱的银行家".to_string()),
        log: Some("/cover/shawshank.jpg".to_string()),
        star: 5,
        tag_id,
        area: Some("美国".to_string()),
        release_time: chrono::NaiveDate::from_ymd_opt(1994, 9, 10),
        length: Some("142分钟".to_string()),
    };

    let created = movies.create(&request).await.expect("create movie");
    let fetched = movies.get(created.id).await.expect("fetch movie");

    assert_eq!(fetched.title, request.title);
    assert_eq!(fetched.url, request.url);
    assert_eq!(fetched.info, request.info);
    assert_eq!(fetched.log, request.log);
    assert_eq!(fetched.star, request.star);
    assert_eq!(fetched.tag_id, tag_id);
    assert_eq!(fetched.area, request.area);
    assert_eq!(fetched.release_time, request.release_time);
    assert_eq!(fetched.length, request.length);
    assert_eq!(fetched.play_num, 0);
    assert_eq!(fetched.comment_num, 0);

    let by_title = movies
        .get_by_title("肖申克的救赎")
        .await
        .expect("fetch by title");
    assert_eq!(by_title.id, created.id);
}

#[tokio::test]
async fn movie_update_only_touches_given_fields() {
    let db = setup_test_db().await;
    let movies = MoviesRepository::new(&db);
    let tag_id = create_tag(&db, "动画").await;

    let created = movies
        .create(&CreateMovieRequest {
            title: "千与千寻".to_string(),
            url: "/movie/chihiro.mp4".to_string(),
            info: None,
            log: None,
            star: 5,
            tag_id,
            area: Some("日本".to_string()),
            release_time: None,
            length: None,
        })
        .await
        .expect("create movie");

    let updated = movies
        .update(
            created.id,
            &UpdateMovieRequest {
                info: Some("神隐少女".to_string()),
                star: Some(4),
                ..Default::default()
            },
        )
        .await
        .expect("update movie");

    assert_eq!(updated.info.as_deref(), Some("神隐少女"));
    assert_eq!(updated.star, 4);
    // 未给出的字段保持原值
    assert_eq!(updated.title, "千与千寻");
    assert_eq!(updated.area.as_deref(), Some("日本"));
}

#[tokio::test]
async fn movie_list_filters_by_tag_and_search() {
    let db = setup_test_db().await;
    let movies = MoviesRepository::new(&db);
    let drama = create_tag(&db, "战争").await;
    let comedy = create_tag(&db, "歌舞").await;

    for (title, tag_id) in [
        ("拯救大兵瑞恩", drama),
        ("敦刻尔克", drama),
        ("爱乐之城", comedy),
    ] {
        movies
            .create(&CreateMovieRequest {
                title: title.to_string(),
                url: format!("/movie/{title}.mp4"),
                info: None,
                log: None,
                star: 4,
                tag_id,
                area: None,
                release_time: None,
                length: None,
            })
            .await
            .expect("create movie");
    }

    let page = movies
        .list(&MovieQuery {
            tag_id: Some(drama),
            ..Default::default()
        })
        .await
        .expect("list by tag");
    assert_eq!(page.pagination.total, 2);

    let page = movies
        .list(&MovieQuery {
            search: Some("大兵".to_string()),
            ..Default::default()
        })
        .await
        .expect("list by search");
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.items[0].title, "拯救大兵瑞恩");

    let by_tag = movies.list_by_tag(comedy).await.expect("list_by_tag");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "爱乐之城");
}

#[tokio::test]
async fn preview_list_is_paginated() {
    let db = setup_test_db().await;
    let previews = PreviewsRepository::new(&db);

    for i in 0..12 {
        previews
            .create(&format!("预告 {i}"), &format!("/logo/{i}.jpg"))
            .await
            .expect("create preview");
    }

    let page = previews
        .list(PaginationParams::new(Some(2), Some(5)))
        .await
        .expect("list previews");

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.pagination.total, 12);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.pages, 3);

    let last = previews
        .list(PaginationParams::new(Some(3), Some(5)))
        .await
        .expect("list last page");
    assert_eq!(last.items.len(), 2);
}

#[tokio::test]
async fn preview_update_and_delete() {
    let db = setup_test_db().await;
    let previews = PreviewsRepository::new(&db);

    let created = previews
        .create("沙丘 3", "/logo/dune3.jpg")
        .await
        .expect("create preview");

    let updated = previews
        .update(
            created.id,
            &UpdatePreviewRequest {
                logo: Some("/logo/dune3-v2.jpg".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update preview");
    assert_eq!(updated.title, "沙丘 3");
    assert_eq!(updated.logo, "/logo/dune3-v2.jpg");

    previews.delete(created.id).await.expect("delete preview");
    let err = previews.get(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn play_counter_increments_atomically() {
    let db = setup_test_db().await;
    let movies = MoviesRepository::new(&db);
    let tag_id = create_tag(&db, "纪录").await;

    let movie = movies
        .create(&CreateMovieRequest {
            title: "地球脉动".to_string(),
            url: "/movie/planet-earth.mp4".to_string(),
            info: None,
            log: None,
            star: 5,
            tag_id,
            area: None,
            release_time: None,
            length: None,
        })
        .await
        .expect("create movie");

    movies.increment_play_num(movie.id).await.expect("play +1");
    movies.increment_play_num(movie.id).await.expect("play +1");

    let fetched = movies.get(movie.id).await.expect("fetch movie");
    assert_eq!(fetched.play_num, 2);

    let err = movies.increment_play_num(9999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn creating_comment_bumps_comment_num() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);
    let movies = MoviesRepository::new(&db);
    let comments = CommentsRepository::new(&db);
    let tag_id = create_tag(&db, "犯罪").await;

    let user = users
        .create(&CreateUserRequest {
            name: "eve".to_string(),
            password: "secret1".to_string(),
            email: "eve@example.com".to_string(),
            phone: "13800000010".to_string(),
            info: None,
            face: None,
        })
        .await
        .expect("create user");

    let movie = movies
        .create(&CreateMovieRequest {
            title: "教父".to_string(),
            url: "/movie/godfather.mp4".to_string(),
            info: None,
            log: None,
            star: 5,
            tag_id,
            area: None,
            release_time: None,
            length: None,
        })
        .await
        .expect("create movie");

    let comment = comments
        .create(movie.id, user.id, "经典中的经典")
        .await
        .expect("create comment");
    assert_eq!(comment.content, "经典中的经典");

    let fetched = movies.get(movie.id).await.expect("fetch movie");
    assert_eq!(fetched.comment_num, 1);

    comments.delete(comment.id).await.expect("delete comment");
    let err = comments.get(comment.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn user_profile_round_trip_and_password_change() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);

    let created = users
        .create(&CreateUserRequest {
            name: "frank".to_string(),
            password: "secret1".to_string(),
            email: "frank@example.com".to_string(),
            phone: "13800000011".to_string(),
            info: Some("影迷一枚".to_string()),
            face: None,
        })
        .await
        .expect("create user");
    assert!(!created.uuid.is_empty());

    let by_uuid = users.get_by_uuid(&created.uuid).await.expect("get by uuid");
    assert_eq!(by_uuid.id, created.id);

    let updated = users
        .update(
            created.id,
            &UpdateUserRequest {
                face: Some("/face/frank.jpg".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update user");
    assert_eq!(updated.face.as_deref(), Some("/face/frank.jpg"));
    assert_eq!(updated.info.as_deref(), Some("影迷一枚"));

    // 旧密码错误时拒绝修改
    let err = users
        .change_password(created.id, "wrong-pass", "next-secret")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    users
        .change_password(created.id, "secret1", "next-secret")
        .await
        .expect("change password");

    let verified = users
        .verify_password("frank", "next-secret")
        .await
        .expect("verify");
    assert!(verified.is_some());
    let rejected = users
        .verify_password("frank", "secret1")
        .await
        .expect("verify old");
    assert!(rejected.is_none());
}

#[tokio::test]
async fn missing_rows_surface_not_found() {
    let db = setup_test_db().await;

    let err = MoviesRepository::new(&db).get(42).await.unwrap_err();
    assert!(err.is_not_found());

    let err = MoviesRepository::new(&db)
        .update(42, &UpdateMovieRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = UsersRepository::new(&db).delete(42).await.unwrap_err();
    assert!(err.is_not_found());

    let err = TagsRepository::new(&db).get_by_name("不存在").await.unwrap_err();
    assert!(err.is_not_found());
}
