//! 语言 / 状态解析 - 业务能力层
//!
//! 目录作为参数传入，本模块不持有任何状态

use crate::models::report::unknown_status;
use crate::models::{LanguageCatalog, LanguageId, StatusCatalog, StatusId};
use phf::phf_map;
use tracing::debug;

/// 问卷中常见的语言简写 → 目录名称中可匹配的关键字
///
/// 仅在原始标记匹配不到任何语言时使用
static LANGUAGE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "cpp" => "c++",
    "cxx" => "c++",
    "cc" => "c++",
    "c#" => "c#",
    "cs" => "c#",
    "csharp" => "c#",
    "js" => "javascript",
    "node" => "javascript",
    "nodejs" => "javascript",
    "ts" => "typescript",
    "golang" => "go",
    "py" => "python",
    "py3" => "python",
    "python3" => "python",
    "rb" => "ruby",
    "rs" => "rust",
    "kt" => "kotlin",
    "sh" => "bash",
    "shell" => "bash",
};

/// 将声明的语言标记解析为评测服务的语言编号
///
/// 匹配规则：小写后的标记被包含在小写后的目录名称中。
/// 多个条目都匹配时取目录中**最后一个**匹配项，这是约定而非最佳匹配。
/// 空标记不匹配任何语言。
pub fn resolve_language(tag: &str, catalog: &LanguageCatalog) -> Option<LanguageId> {
    let needle = tag.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(id) = last_containing(&needle, catalog) {
        return Some(id);
    }

    let alias = LANGUAGE_ALIASES.get(needle.as_str())?;
    debug!("语言标记 '{}' 使用别名 '{}' 匹配", tag, alias);
    last_containing(alias, catalog)
}

fn last_containing(needle: &str, catalog: &LanguageCatalog) -> Option<LanguageId> {
    let mut found = None;
    for language in catalog.iter() {
        if language.name.to_lowercase().contains(needle) {
            found = Some(language.id);
        }
    }
    found
}

/// 查找状态描述
pub fn resolve_status(status_id: StatusId, catalog: &StatusCatalog) -> Option<&str> {
    catalog
        .iter()
        .find(|status| status.id == status_id)
        .map(|status| status.description.as_str())
}

/// 查找状态描述，找不到时返回 `Unknown status (<id>)`
pub fn describe_status(status_id: StatusId, catalog: &StatusCatalog) -> String {
    resolve_status(status_id, catalog)
        .map(str::to_string)
        .unwrap_or_else(|| unknown_status(status_id))
}
