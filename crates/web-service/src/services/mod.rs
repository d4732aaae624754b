//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，遵循六边形架构原则

pub mod showcase;
pub mod traits;

pub use showcase::ShowcaseService;
pub use traits::{ShowcaseServiceTrait, ShowcaseStats};
