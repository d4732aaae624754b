//! 展示平台客户端
//!
//! 通过 HTTP 访问展示平台服务，并维护页面需要的状态：
//! - 项目列表（只在初始化时拉取一次）
//! - 分类筛选、视图筛选（纯内存操作，不发起请求）
//! - 评论面板、评论草稿
//! - 每个项目的"已复制"临时标记
//!
//! 页面渲染不在这里实现，渲染层只需要读取 [`ShowcaseClient`] 的状态并调用对应的方法。

pub mod api;
pub mod error;
pub mod models;
pub mod state;

pub use api::{HttpShowcaseApi, ShowcaseApi};
pub use error::{ClientError, ClientResult};
pub use models::{Comment, Project};
pub use state::{ShowcaseClient, View};
