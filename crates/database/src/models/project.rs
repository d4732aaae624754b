//! 项目数据模型
//!
//! 定义项目相关的结构体以及项目视图（Tab）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 项目信息结构体
///
/// 项目只在启动时通过种子数据写入，之后不会再被修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: String,
    /// 展示用的占位符（通常是一个emoji），不是图片地址
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub starred: bool,
}

/// 项目列表视图
///
/// 只接受这三个固定的小写字符串，其他取值由调用方决定如何处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// `featured == true` 的项目
    Featured,
    /// 全部项目，最后加入的排在最前
    Latest,
    /// `starred == true` 的项目
    Starred,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Featured => "featured",
            Tab::Latest => "latest",
            Tab::Starred => "starred",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的视图名称
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab `{0}`")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Tab::Featured),
            "latest" => Ok(Tab::Latest),
            "starred" => Ok(Tab::Starred),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}
