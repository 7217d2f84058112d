//! 代码块提取 - 业务能力层
//!
//! 只识别问卷回答中的 ``` 围栏代码块，不是通用的 markdown 解析器

use crate::models::CodeBlock;
use regex::Regex;
use std::sync::OnceLock;

/// 开头围栏：``` 加同一行的语言标记，必须换行
fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A```([^\n]*)\n(.*)\z").expect("opening fence regex"))
}

/// 结尾围栏：单独一行的 ```，其后只允许空白
fn closing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A(?:(.*?)\r?\n)?```[ \t\r\n]*\z").expect("closing fence regex")
    })
}

/// 从单元格文本中提取代码块
///
/// - 没有开头围栏：标记为空，代码保持原文
/// - 有开头围栏但缺少结尾围栏：保留标记，代码保持原文（含围栏行）
/// - 完整的代码块：返回语言标记和两道围栏之间的内容
pub fn extract(cell_text: &str) -> CodeBlock {
    let Some(opening) = opening_fence().captures(cell_text) else {
        return CodeBlock {
            tag: String::new(),
            body: cell_text.to_string(),
            fenced: false,
        };
    };

    let tag = opening[1].trim().to_string();
    let rest = &opening[2];

    match closing_fence().captures(rest) {
        Some(closing) => CodeBlock {
            tag,
            body: closing.get(1).map(|m| m.as_str()).unwrap_or_default().to_string(),
            fenced: true,
        },
        None => CodeBlock {
            tag,
            body: cell_text.to_string(),
            fenced: true,
        },
    }
}
