//! 评测服务的语言 / 状态目录
//!
//! 每次运行开始时获取一次，之后只读

use serde::{Deserialize, Serialize};

/// 评测服务的语言编号
pub type LanguageId = i64;

/// 评测服务的状态编号
pub type StatusId = i64;

/// 语言目录中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: String,
}

/// 状态目录中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub description: String,
}

/// 语言目录（保持服务返回的顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    entries: Vec<Language>,
}

impl LanguageCatalog {
    pub fn new(entries: Vec<Language>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Language>> for LanguageCatalog {
    fn from(entries: Vec<Language>) -> Self {
        Self::new(entries)
    }
}

/// 状态目录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCatalog {
    entries: Vec<Status>,
}

impl StatusCatalog {
    pub fn new(entries: Vec<Status>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Status>> for StatusCatalog {
    fn from(entries: Vec<Status>) -> Self {
        Self::new(entries)
    }
}

/// 一次运行所需的两个目录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub languages: LanguageCatalog,
    pub statuses: StatusCatalog,
}
