//! 数据仓库模块
//!
//! 这里定义数据访问的Repository层

pub mod comment;
pub mod project;
pub mod traits;

// 重新导出具体的类型
pub use comment::CommentRepository;
pub use project::ProjectRepository;
pub use traits::{CommentRepositoryTrait, ProjectRepositoryTrait};
