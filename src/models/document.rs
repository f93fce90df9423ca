//! 文档模型

/// 一个待分析的输入文档
///
/// 加载后不可变；标识符由文件名（去扩展名）派生，批次内唯一。
#[derive(Debug, Clone)]
pub struct Document {
    /// 文档标识符
    pub id: String,
    /// 原始文本内容
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
