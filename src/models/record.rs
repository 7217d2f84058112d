use serde::Deserialize;

/// 问卷中一道代码题的原始回答
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeAnswer {
    /// 单元格原文（可能包含 ``` 代码块）
    pub raw: String,
}

impl CodeAnswer {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// 一位答题者的提交记录
///
/// 读取后不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// 在表格中的行号（从1开始，仅用于日志显示）
    pub sheet_row: usize,
    pub name: String,
    pub email: String,
    pub campus: String,
    /// 第一道代码题
    pub primary: CodeAnswer,
    /// 第二道代码题
    pub secondary: CodeAnswer,
}

/// 从单元格中提取出的代码块
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    /// 声明的语言标记，未找到代码块时为空
    pub tag: String,
    /// 代码内容（已去掉围栏）
    pub body: String,
    /// 是否找到了开头围栏
    pub fenced: bool,
}

impl CodeBlock {
    /// 是否声明了语言标记
    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }
}

/// 问卷表中各字段所在的列（从0开始）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub email: usize,
    pub name: usize,
    pub campus: usize,
    pub primary_answer: usize,
    pub secondary_answer: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            email: 1,
            name: 3,
            campus: 4,
            primary_answer: 17,
            secondary_answer: 19,
        }
    }
}
