//! 警告写入服务 - 业务能力层
//!
//! 只负责"把失败的文档记到 warn.txt"能力，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将处理失败的文档及原因追加到 warn.txt
/// - 只处理单个文档的记录
/// - 不出现 Vec<Document>
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: PathBuf,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: PathBuf::from("warn.txt"),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入一条失败记录
    pub fn write(&self, doc_id: &str, reason: &str) -> Result<()> {
        debug!("写入警告: 文档 {} | 原因: {}", doc_id, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!("文档 {} | 原因: {}\n", doc_id, reason);
        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warn.txt");
        let writer = WarnWriter::with_path(&path);

        writer.write("doc_a", "调用失败").unwrap();
        writer.write("doc_b", "超时").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("doc_a"));
        assert!(content.contains("doc_b"));
    }
}
