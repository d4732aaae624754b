//! 数据存储模块
//!
//! 这个模块提供了内存数据存储、种子数据加载、查询等功能

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::DatabaseError;
pub use models::{CommentCreate, CommentInfo, ProjectInfo, Tab};
pub use repositories::{CommentRepository, CommentRepositoryTrait, ProjectRepository, ProjectRepositoryTrait};
pub use seed::{default_catalog, initialize_store, load_seed_file};
pub use store::ShowcaseStore;

/// 数据存储操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
