//! 数据模型模块
//!
//! 这里定义存储层使用的结构体和相关操作

pub mod comment;
pub mod project;

// 重新导出具体的模型
pub use comment::{CommentCreate, CommentInfo};
pub use project::{ProjectInfo, Tab};
