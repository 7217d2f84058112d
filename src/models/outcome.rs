use crate::models::{CodeBlock, SubmissionResult};

/// 一道代码题的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// 评测完成
    Graded {
        block: CodeBlock,
        result: SubmissionResult,
        status: String,
    },
    /// 单元格中没有 ``` 围栏
    NoCodeBlock { raw: String },
    /// 代码块没有语言标记，或语言目录中找不到声明的语言
    UnsupportedLanguage { block: CodeBlock },
    /// 提交或查询评测失败
    Failed { block: CodeBlock, error: String },
    /// 未启用评测
    NotGraded,
}

impl TrackOutcome {
    /// 是否需要记录为失败
    pub fn is_failure(&self) -> bool {
        !matches!(self, TrackOutcome::Graded { .. } | TrackOutcome::NotGraded)
    }

    /// 失败原因（用于失败日志）
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            TrackOutcome::NoCodeBlock { .. } => Some("未找到代码块".to_string()),
            TrackOutcome::UnsupportedLanguage { block } if !block.has_tag() => {
                Some("代码块缺少语言标记".to_string())
            }
            TrackOutcome::UnsupportedLanguage { block } => {
                Some(format!("无法识别的语言: {}", block.tag))
            }
            TrackOutcome::Failed { error, .. } => Some(format!("评测失败: {}", error)),
            TrackOutcome::Graded { .. } | TrackOutcome::NotGraded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(tag: &str) -> CodeBlock {
        CodeBlock {
            tag: tag.to_string(),
            body: "print(1)".to_string(),
            fenced: true,
        }
    }

    #[test]
    fn test_failure_follows_variant() {
        let graded = TrackOutcome::Graded {
            block: block("python"),
            result: SubmissionResult::default(),
            // 状态描述恰好以失败标记开头也不算失败
            status: "ERROR: judge says so".to_string(),
        };
        assert!(!graded.is_failure());
        assert_eq!(graded.failure_reason(), None);
        assert!(!TrackOutcome::NotGraded.is_failure());

        let failed = TrackOutcome::Failed {
            block: block("go"),
            error: "timeout".to_string(),
        };
        assert!(failed.is_failure());
        assert!(TrackOutcome::NoCodeBlock { raw: String::new() }.is_failure());
    }

    #[test]
    fn test_untagged_block_reason() {
        let untagged = TrackOutcome::UnsupportedLanguage { block: block("") };
        assert_eq!(untagged.failure_reason().as_deref(), Some("代码块缺少语言标记"));

        let cobol = TrackOutcome::UnsupportedLanguage { block: block("cobol") };
        assert_eq!(cobol.failure_reason().as_deref(), Some("无法识别的语言: cobol"));
    }
}
