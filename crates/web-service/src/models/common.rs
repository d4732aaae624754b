use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 封装符合json-api的列表对象
///
/// 列表不分页，`total` 就是 `data` 的长度
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,

    #[schema(example = 6)]
    /// 列表总数
    pub total: u32,
}

impl<T> ReplyList<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self { data, total }
    }
}

impl<T> From<Vec<T>> for ReplyList<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}


/// 服务健康信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct HealthInfo {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "showcase")]
    pub service: String,

    /// RFC3339格式的当前时间
    pub timestamp: String,

    /// 项目总数
    pub projects: usize,

    /// 评论总数
    pub comments: usize,
}
