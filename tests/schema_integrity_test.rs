//! 模式完整性集成测试
//!
//! 唯一约束、外键约束与级联/限制删除策略。

use migration::{Migrator, MigratorTrait};
use movie_catalog::repository::{
    CollectionsRepository, CommentsRepository, CreateMovieRequest, CreateUserRequest,
    MoviesRepository, PaginationParams, TagsRepository, UsersRepository,
};
use sea_orm::{Database, DatabaseConnection};

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

fn user_request(name: &str, phone: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        password: "secret1".to_string(),
        email: format!("{name}@example.com"),
        phone: phone.to_string(),
        info: None,
        face: None,
    }
}

fn movie_request(title: &str, tag_id: i32) -> CreateMovieRequest {
    CreateMovieRequest {
        title: title.to_string(),
        url: format!("/movie/{title}.mp4"),
        info: None,
        log: Some(format!("/cover/{title}.jpg")),
        star: 4,
        tag_id,
        area: Some("中国".to_string()),
        release_time: None,
        length: Some("120分钟".to_string()),
    }
}

#[tokio::test]
async fn duplicate_unique_user_name_is_conflict() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);

    users
        .create(&user_request("alice", "13800000001"))
        .await
        .expect("create first user");

    // 同昵称、不同邮箱与手机号，仍应被唯一索引拒绝
    let mut dup = user_request("alice", "13800000002");
    dup.email = "alice2@example.com".to_string();
    let err = users.create(&dup).await.unwrap_err();
    assert!(err.is_conflict(), "expected conflict, got: {err}");
}

#[tokio::test]
async fn duplicate_tag_name_is_conflict() {
    let db = setup_test_db().await;
    let tags = TagsRepository::new(&db);

    tags.create("科幻").await.expect("create tag");
    let err = tags.create("科幻").await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn movie_with_missing_tag_is_conflict() {
    let db = setup_test_db().await;
    let movies = MoviesRepository::new(&db);

    let err = movies.create(&movie_request("流浪地球", 999)).await.unwrap_err();
    assert!(err.is_conflict(), "expected fk conflict, got: {err}");
}

#[tokio::test]
async fn comment_with_missing_parents_is_conflict() {
    let db = setup_test_db().await;
    let comments = CommentsRepository::new(&db);

    let err = comments.create(999, 999, "好片").await.unwrap_err();
    assert!(err.is_conflict(), "expected fk conflict, got: {err}");
}

#[tokio::test]
async fn deleting_user_cascades_to_dependents() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);
    let tags = TagsRepository::new(&db);
    let movies = MoviesRepository::new(&db);
    let comments = CommentsRepository::new(&db);
    let collections = CollectionsRepository::new(&db);

    let user = users
        .create(&user_request("bob", "13800000003"))
        .await
        .expect("create user");
    let tag = tags.create("动作").await.expect("create tag");
    let movie = movies
        .create(&movie_request("疾速追杀", tag.id))
        .await
        .expect("create movie");

    comments
        .create(movie.id, user.id, "不错")
        .await
        .expect("create comment");
    collections.add(user.id, movie.id).await.expect("collect");
    users
        .record_login(user.id, "127.0.0.1")
        .await
        .expect("record login");

    users.delete(user.id).await.expect("delete user");

    // 评论、收藏、登录日志级联删除，电影保留
    let page = comments
        .list_for_movie(movie.id, PaginationParams::default())
        .await
        .expect("list comments");
    assert_eq!(page.pagination.total, 0);

    let logins = users
        .list_logins(user.id, PaginationParams::default())
        .await
        .expect("list logins");
    assert_eq!(logins.pagination.total, 0);

    assert_eq!(
        collections
            .count_for_movie(movie.id)
            .await
            .expect("count collections"),
        0
    );

    assert!(movies.get(movie.id).await.is_ok());
}

#[tokio::test]
async fn deleting_tag_with_movies_is_restricted() {
    let db = setup_test_db().await;
    let tags = TagsRepository::new(&db);
    let movies = MoviesRepository::new(&db);

    let tag = tags.create("爱情").await.expect("create tag");
    let movie = movies
        .create(&movie_request("泰坦尼克号", tag.id))
        .await
        .expect("create movie");

    let err = tags.delete(tag.id).await.unwrap_err();
    assert!(err.is_conflict(), "expected restrict conflict, got: {err}");

    // 电影的标签引用未被置空或悬挂
    assert_eq!(movies.get(movie.id).await.expect("get movie").tag_id, tag.id);

    // 电影删除后标签可以删除
    movies.delete(movie.id).await.expect("delete movie");
    tags.delete(tag.id).await.expect("delete tag");
}

#[tokio::test]
async fn deleting_movie_cascades_to_comments_and_collections() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);
    let tags = TagsRepository::new(&db);
    let movies = MoviesRepository::new(&db);
    let comments = CommentsRepository::new(&db);
    let collections = CollectionsRepository::new(&db);

    let user = users
        .create(&user_request("carol", "13800000004"))
        .await
        .expect("create user");
    let tag = tags.create("悬疑").await.expect("create tag");
    let movie = movies
        .create(&movie_request("看不见的客人", tag.id))
        .await
        .expect("create movie");

    comments
        .create(movie.id, user.id, "反转精彩")
        .await
        .expect("create comment");
    collections.add(user.id, movie.id).await.expect("collect");

    movies.delete(movie.id).await.expect("delete movie");

    let page = comments
        .list_for_user(user.id, PaginationParams::default())
        .await
        .expect("list comments");
    assert_eq!(page.pagination.total, 0);

    let page = collections
        .list_for_user(user.id, PaginationParams::default())
        .await
        .expect("list collections");
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn duplicate_collection_is_conflict() {
    let db = setup_test_db().await;
    let users = UsersRepository::new(&db);
    let tags = TagsRepository::new(&db);
    let movies = MoviesRepository::new(&db);
    let collections = CollectionsRepository::new(&db);

    let user = users
        .create(&user_request("dave", "13800000005"))
        .await
        .expect("create user");
    let tag = tags.create("喜剧").await.expect("create tag");
    let movie = movies
        .create(&movie_request("让子弹飞", tag.id))
        .await
        .expect("create movie");

    collections.add(user.id, movie.id).await.expect("collect");
    let err = collections.add(user.id, movie.id).await.unwrap_err();
    assert!(err.is_conflict());

    assert!(collections
        .is_collected(user.id, movie.id)
        .await
        .expect("is_collected"));
}
