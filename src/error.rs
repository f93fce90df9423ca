//! 应用程序错误类型
//!
//! 按领域划分的错误枚举，统一由 `AppError` 包装

use std::path::PathBuf;

/// 应用程序统一 Result 别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用程序错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// Agent 调用错误
    #[error("Agent错误: {0}")]
    Agent(#[from] AgentError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 输入目录中没有找到任何文档（致命，进程级错误）
    #[error("在目录 {dir} 中没有找到任何 .txt 文档")]
    NoDocumentsFound { dir: String },
    /// 并发数必须为正整数
    #[error("无效的并发数: {value}（必须大于 0）")]
    InvalidConcurrency { value: usize },
}

/// 文件操作错误
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// 读取失败
    #[error("无法读取 {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入失败
    #[error("无法写入 {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 文档标识符重复（两个文件去掉扩展名后同名）
    #[error("文档标识符重复: {id}")]
    DuplicateDocumentId { id: String },
}

/// Agent 调用错误
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// 创建会话失败
    #[error("创建会话 {session_id} 失败: {source}")]
    SessionCreationFailed {
        session_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 单次调用失败
    #[error("会话 {session_id} 调用失败: {source}")]
    InvocationFailed {
        session_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_documents_display() {
        let err = AppError::from(ConfigError::NoDocumentsFound {
            dir: "data".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("data"), "错误信息应包含目录名: {}", msg);
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = AppError::from(FileError::DuplicateDocumentId {
            id: "policy_a".to_string(),
        });
        assert!(err.to_string().contains("policy_a"));
    }
}
