//! # 仓储层
//!
//! 每个实体族一个仓储，显式持有数据库连接（不使用全局句柄），
//! 提供 CRUD 与关系遍历查询。存储层错误原样分类上抛，不做重试。

pub mod admins;
pub mod auths;
pub mod collections;
pub mod comments;
pub mod movies;
pub mod password;
pub mod previews;
pub mod roles;
pub mod shared;
pub mod tags;
pub mod users;

pub use admins::{AdminInfo, AdminsRepository, CreateAdminRequest};
pub use auths::{AuthsRepository, UpdateAuthRequest};
pub use collections::CollectionsRepository;
pub use comments::CommentsRepository;
pub use movies::{CreateMovieRequest, MovieQuery, MoviesRepository, UpdateMovieRequest};
pub use password::{check_password, hash_password};
pub use previews::{PreviewsRepository, UpdatePreviewRequest};
pub use roles::RolesRepository;
pub use shared::{Page, PaginationInfo, PaginationParams, build_page};
pub use tags::TagsRepository;
pub use users::{CreateUserRequest, UpdateUserRequest, UserQuery, UsersRepository};
