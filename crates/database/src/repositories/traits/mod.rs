//! 数据仓库 trait 定义
//!
//! 这里定义了各种数据仓库的抽象接口
//!
//! ## Repository Trait 约束 🎯
//!
//! 所有 Repository trait 都使用统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send + Sync`：仓库实例会被多个请求并发访问
//! - `'static`：仓库随服务一直存活，不依赖短期引用
//!
//! 所有方法都是异步的，统一返回 [`DatabaseResult`](crate::DatabaseResult)。
//! 当前实现基于内存存储 [`ShowcaseStore`](crate::ShowcaseStore)，换成其他存储时只需要重新实现这些 trait。

pub mod comment;
pub mod project;

// 重新导出
pub use comment::CommentRepositoryTrait;
pub use project::ProjectRepositoryTrait;
