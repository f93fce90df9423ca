//! 报告写入服务 - 业务能力层
//!
//! 只负责"把整篇报告一次性写盘"能力，不关心流程

use crate::error::{FileError, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 报告写入服务
///
/// 职责：
/// - 计算单个文档的报告路径（`{doc_id}_report.md`）
/// - 整篇内容一次 write 调用写入，不产生半成品文件
/// - 不出现 Vec<Document>
/// - 不关心流程顺序
pub struct ReportWriter {
    out_dir: PathBuf,
}

impl ReportWriter {
    /// 创建指向输出目录的写入服务
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// 单个文档的报告输出路径
    pub fn report_path(&self, doc_id: &str) -> PathBuf {
        self.out_dir.join(format!("{}_report.md", doc_id))
    }

    /// 写入一篇完整的报告
    ///
    /// 内容必须已经在内存中组装完毕；写入是全有或全无的单次调用。
    pub async fn write(&self, doc_id: &str, content: &str) -> Result<PathBuf> {
        let path = self.report_path(doc_id);

        debug!("写入报告: {} ({} 字节)", path.display(), content.len());

        fs::write(&path, content).await.map_err(|e| FileError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}
