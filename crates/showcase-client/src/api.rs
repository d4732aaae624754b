//! 服务接口
//!
//! [`ShowcaseApi`] 描述客户端依赖的五个服务操作，[`HttpShowcaseApi`] 通过 HTTP 调用 web-service。

use crate::error::{ClientError, ClientResult};
use crate::models::{Comment, Project, Reply, ReplyList};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// 展示平台服务接口
#[async_trait::async_trait]
pub trait ShowcaseApi: Send + Sync {
    async fn get_projects(&self) -> ClientResult<Vec<Project>>;

    async fn get_projects_by_category(&self, category: &str) -> ClientResult<Vec<Project>>;

    async fn get_projects_by_tab(&self, tab: &str) -> ClientResult<Vec<Project>>;

    async fn get_comments(&self, project_id: u64) -> ClientResult<Vec<Comment>>;

    /// 返回新评论的ID
    async fn add_comment(&self, project_id: u64, author: &str, content: &str) -> ClientResult<u64>;
}

#[derive(Serialize)]
struct CommentBody<'a> {
    author: &'a str,
    content: &'a str,
}

/// 基于 HTTP 的服务接口实现
#[derive(Debug, Clone)]
pub struct HttpShowcaseApi {
    base_url: Url,
    client: Client,
}

impl HttpShowcaseApi {
    /// # 参数
    /// - `base_url`: 服务根地址，例如 `http://localhost:8080`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    /// 拼接 `/api/v1/...` 地址，每一段都会做百分号编码
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "v1"]).extend(segments);
        }
        url
    }

    async fn read<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<Vec<T>> {
        let url = self.endpoint(segments);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let reply: ReplyList<T> = Self::read(response).await?;
        Ok(reply.data)
    }
}

#[async_trait::async_trait]
impl ShowcaseApi for HttpShowcaseApi {
    async fn get_projects(&self) -> ClientResult<Vec<Project>> {
        self.fetch_list(&["projects"]).await
    }

    async fn get_projects_by_category(&self, category: &str) -> ClientResult<Vec<Project>> {
        self.fetch_list(&["categories", category, "projects"]).await
    }

    async fn get_projects_by_tab(&self, tab: &str) -> ClientResult<Vec<Project>> {
        self.fetch_list(&["tabs", tab, "projects"]).await
    }

    async fn get_comments(&self, project_id: u64) -> ClientResult<Vec<Comment>> {
        let id = project_id.to_string();
        self.fetch_list(&["projects", &id, "comments"]).await
    }

    async fn add_comment(&self, project_id: u64, author: &str, content: &str) -> ClientResult<u64> {
        let id = project_id.to_string();
        let url = self.endpoint(&["projects", &id, "comments"]);
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(&CommentBody { author, content })
            .send()
            .await?;
        let reply: Reply<u64> = Self::read(response).await?;
        Ok(reply.data)
    }
}
