//! 管理端账号与权限集成测试
//!
//! 默认管理员种子数据、凭证校验、角色授权与审计日志。

use migration::{DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD, Migrator, MigratorTrait};
use movie_catalog::repository::{
    AdminsRepository, AuthsRepository, CreateAdminRequest, PaginationParams, RolesRepository,
};
use sea_orm::{Database, DatabaseConnection};

async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

#[tokio::test]
async fn seeded_super_admin_can_log_in() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);

    let seeded = admins
        .get_by_name(DEFAULT_ADMIN_NAME)
        .await
        .expect("seeded admin exists");
    assert!(seeded.is_super_admin);

    let verified = admins
        .verify_password(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD)
        .await
        .expect("verify seeded admin");
    assert!(verified.is_some());

    let rejected = admins
        .verify_password(DEFAULT_ADMIN_NAME, "wrong-password")
        .await
        .expect("verify wrong password");
    assert!(rejected.is_none());

    let err = admins
        .verify_password("no-such-admin", "whatever")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn admin_create_maps_super_flag() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);
    let roles = RolesRepository::new(&db);

    let role = roles.create("内容编辑", &[]).await.expect("create role");

    let normal = admins
        .create(&CreateAdminRequest {
            name: "editor".to_string(),
            password: "editor-pass".to_string(),
            is_super_admin: false,
            role_id: role.id,
        })
        .await
        .expect("create normal admin");
    assert!(!normal.is_super_admin);
    assert_eq!(normal.role_id, role.id);

    let fetched = admins.get(normal.id).await.expect("fetch admin");
    assert_eq!(fetched.name, "editor");
    assert!(!fetched.is_super_admin);
}

#[tokio::test]
async fn role_grants_can_be_listed_and_replaced() {
    let db = setup_test_db().await;
    let auths = AuthsRepository::new(&db);
    let roles = RolesRepository::new(&db);

    let list_movies = auths
        .create("电影列表", "/admin/movie/list")
        .await
        .expect("create auth");
    let add_movie = auths
        .create("添加电影", "/admin/movie/add")
        .await
        .expect("create auth");
    let del_movie = auths
        .create("删除电影", "/admin/movie/del")
        .await
        .expect("create auth");

    let role = roles
        .create("电影管理", &[list_movies.id, add_movie.id])
        .await
        .expect("create role with grants");

    let granted = roles.list_auths(role.id).await.expect("list grants");
    let mut ids: Vec<i32> = granted.iter().map(|a| a.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![list_movies.id, add_movie.id]);

    roles
        .set_auths(role.id, &[del_movie.id])
        .await
        .expect("replace grants");
    let granted = roles.list_auths(role.id).await.expect("list grants");
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].id, del_movie.id);

    // 删除权限后授权行级联消失
    auths.delete(del_movie.id).await.expect("delete auth");
    let granted = roles.list_auths(role.id).await.expect("list grants");
    assert!(granted.is_empty());
}

#[tokio::test]
async fn role_create_rolls_back_on_missing_auth() {
    let db = setup_test_db().await;
    let roles = RolesRepository::new(&db);

    let err = roles.create("残缺角色", &[9999]).await.unwrap_err();
    assert!(err.is_conflict(), "expected fk conflict, got: {err}");

    // 角色插入随事务回滚
    let listed = roles.list().await.expect("list roles");
    assert!(listed.iter().all(|r| r.name != "残缺角色"));
}

#[tokio::test]
async fn role_with_admins_cannot_be_deleted() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);
    let roles = RolesRepository::new(&db);

    let role = roles.create("审核员", &[]).await.expect("create role");
    admins
        .create(&CreateAdminRequest {
            name: "auditor".to_string(),
            password: "auditor-pass".to_string(),
            is_super_admin: false,
            role_id: role.id,
        })
        .await
        .expect("create admin");

    let err = roles.delete(role.id).await.unwrap_err();
    assert!(err.is_conflict(), "expected restrict conflict, got: {err}");
}

#[tokio::test]
async fn admin_audit_logs_gate_deletion() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);
    let roles = RolesRepository::new(&db);

    let role = roles.create("运营", &[]).await.expect("create role");
    let admin = admins
        .create(&CreateAdminRequest {
            name: "operator".to_string(),
            password: "operator-pass".to_string(),
            is_super_admin: false,
            role_id: role.id,
        })
        .await
        .expect("create admin");

    admins
        .record_login(admin.id, "10.0.0.1")
        .await
        .expect("record login");
    admins
        .record_operation(admin.id, "10.0.0.1", "下架电影《测试》")
        .await
        .expect("record operation");

    let logins = admins
        .list_logins(admin.id, PaginationParams::default())
        .await
        .expect("list logins");
    assert_eq!(logins.pagination.total, 1);

    let operations = admins
        .list_operations(admin.id, PaginationParams::default())
        .await
        .expect("list operations");
    assert_eq!(operations.pagination.total, 1);
    assert_eq!(operations.items[0].reason, "下架电影《测试》");

    // 操作审计存在时不允许删除管理员
    let err = admins.delete(admin.id).await.unwrap_err();
    assert!(err.is_conflict(), "expected restrict conflict, got: {err}");

    // 仅剩登录日志的管理员可删除，日志级联清理
    let other = admins
        .create(&CreateAdminRequest {
            name: "operator2".to_string(),
            password: "operator-pass".to_string(),
            is_super_admin: false,
            role_id: role.id,
        })
        .await
        .expect("create admin");
    admins
        .record_login(other.id, "10.0.0.2")
        .await
        .expect("record login");

    admins.delete(other.id).await.expect("delete admin");
    let err = admins.get(other.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn admin_change_password_requires_current() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);
    let roles = RolesRepository::new(&db);

    let role = roles.create("客服", &[]).await.expect("create role");
    let admin = admins
        .create(&CreateAdminRequest {
            name: "support".to_string(),
            password: "support-pass".to_string(),
            is_super_admin: false,
            role_id: role.id,
        })
        .await
        .expect("create admin");

    let err = admins
        .change_password(admin.id, "wrong-pass", "next-secret")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    admins
        .change_password(admin.id, "support-pass", "next-secret")
        .await
        .expect("change password");

    let verified = admins
        .verify_password("support", "next-secret")
        .await
        .expect("verify new password");
    assert!(verified.is_some());
}

#[tokio::test]
async fn admin_password_can_be_reset() {
    let db = setup_test_db().await;
    let admins = AdminsRepository::new(&db);

    let err = admins
        .reset_password(DEFAULT_ADMIN_NAME, "short")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    admins
        .reset_password(DEFAULT_ADMIN_NAME, "new-admin-pass")
        .await
        .expect("reset password");

    let verified = admins
        .verify_password(DEFAULT_ADMIN_NAME, "new-admin-pass")
        .await
        .expect("verify new password");
    assert!(verified.is_some());

    let rejected = admins
        .verify_password(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD)
        .await
        .expect("verify old password");
    assert!(rejected.is_none());
}
