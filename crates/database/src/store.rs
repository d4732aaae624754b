//! 内存数据存储
//!
//! [`ShowcaseStore`] 持有全部项目和评论数据，生命周期与服务进程一致：
//! 启动时由种子数据创建，服务关闭后随之释放。
//!
//! - 项目列表在创建后只读，不需要加锁
//! - 评论日志放在 [`RwLock`] 中，读请求可以并发执行，写请求串行执行
//!
//! 评论ID的分配和写入在同一个写锁内完成，因此并发写入不会拿到相同的ID。

use crate::models::{CommentCreate, CommentInfo, ProjectInfo};
use crate::{DatabaseError, DatabaseResult};
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::debug;

/// 评论日志
#[derive(Debug)]
struct CommentLog {
    /// 下一个分配的评论ID，从1开始
    next_id: u64,
    /// 最近一次写入的时间戳，保证时间戳不回退
    last_timestamp: i64,
    entries: Vec<CommentInfo>,
}

/// 展示平台的数据存储
#[derive(Debug)]
pub struct ShowcaseStore {
    projects: Vec<ProjectInfo>,
    comments: RwLock<CommentLog>,
}

impl ShowcaseStore {
    /// 使用种子项目创建存储
    ///
    /// 项目ID必须唯一，否则返回 [`DatabaseError::SeedError`]
    pub fn new(projects: Vec<ProjectInfo>) -> DatabaseResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(DatabaseError::seed(format!("duplicate project id {}", project.id)));
            }
        }

        Ok(Self {
            projects,
            comments: RwLock::new(CommentLog {
                next_id: 1,
                last_timestamp: 0,
                entries: Vec::new(),
            }),
        })
    }

    /// 全部项目，按写入顺序
    pub fn projects(&self) -> &[ProjectInfo] {
        &self.projects
    }

    pub fn project(&self, id: u64) -> Option<&ProjectInfo> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// 查询指定项目的全部评论，按写入顺序
    pub async fn comments_for(&self, project_id: u64) -> Vec<CommentInfo> {
        let log = self.comments.read().await;
        log.entries
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect()
    }

    /// 追加一条评论
    ///
    /// 这里不校验 `project_id` 是否存在，由上层决定
    pub async fn append_comment(&self, comment: CommentCreate) -> CommentInfo {
        let mut log = self.comments.write().await;

        let id = log.next_id;
        log.next_id += 1;

        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let timestamp = now.max(log.last_timestamp);
        log.last_timestamp = timestamp;

        let info = CommentInfo {
            id,
            project_id: comment.project_id,
            author: comment.author,
            content: comment.content,
            timestamp,
        };
        log.entries.push(info.clone());

        debug!("💬 评论写入存储 id={} project_id={}", info.id, info.project_id);
        info
    }

    /// 评论总数
    pub async fn comment_count(&self) -> usize {
        self.comments.read().await.entries.len()
    }
}
