//! 文档处理上下文
//!
//! 封装"我正在处理第几个文档、用哪个会话"这一信息

use std::fmt::Display;

/// 文档处理上下文
///
/// 包含处理单个文档所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档标识符
    pub doc_id: String,

    /// 文档在批次中的索引（仅用于日志显示，从 1 开始）
    pub doc_index: usize,

    /// 会话标识符，由文档标识符确定性派生
    pub session_id: String,
}

impl DocumentCtx {
    /// 创建新的文档上下文
    ///
    /// 会话标识符固定为 `session_{doc_id}`，同一文档的八个问题共用一个会话。
    pub fn new(doc_id: impl Into<String>, doc_index: usize) -> Self {
        let doc_id = doc_id.into();
        let session_id = format!("session_{}", doc_id);
        Self {
            doc_id,
            doc_index,
            session_id,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文档 ID#{} 会话#{}]", self.doc_id, self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_deterministic() {
        let a = DocumentCtx::new("policy_a", 1);
        let b = DocumentCtx::new("policy_a", 7);
        assert_eq!(a.session_id, "session_policy_a");
        assert_eq!(a.session_id, b.session_id);
    }

    #[test]
    fn test_display_contains_ids() {
        let ctx = DocumentCtx::new("doc_x", 2);
        let shown = ctx.to_string();
        assert!(shown.contains("doc_x"));
        assert!(shown.contains("session_doc_x"));
    }
}
