//! # Entity 模块
//!
//! 包含电影站点所有 Sea-ORM 实体定义

pub mod user;
pub mod user_log;
pub mod tag;
pub mod movie;
pub mod preview;
pub mod comment;
pub mod movie_col;
pub mod auth;
pub mod role;
pub mod role_auth;
pub mod admin;
pub mod admin_log;
pub mod op_log;

pub use user::Entity as User;
pub use user_log::Entity as UserLog;
pub use tag::Entity as Tag;
pub use movie::Entity as Movie;
pub use preview::Entity as Preview;
pub use comment::Entity as Comment;
pub use movie_col::Entity as MovieCol;
pub use auth::Entity as Auth;
pub use role::Entity as Role;
pub use role_auth::Entity as RoleAuth;
pub use admin::Entity as Admin;
pub use admin_log::Entity as AdminLog;
pub use op_log::Entity as OpLog;
