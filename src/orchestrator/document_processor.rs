//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个文档的完整流水线，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **会话创建**：为文档建立专属会话（`session_{doc_id}`）
//! 2. **流程调度**：创建并驱动 `DocumentFlow` 完成八问
//! 3. **报告落盘**：整篇内容一次写入 `{doc_id}_report.md`
//! 4. **日志输出**：记录开始/完成信息

use crate::agent::AgentClient;
use crate::config::Config;
use crate::models::Document;
use crate::services::ReportWriter;
use crate::workflow::{DocumentCtx, DocumentFlow};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// 处理单个文档
///
/// # 参数
/// - `agent`: agent 客户端
/// - `document`: 文档数据
/// - `doc_index`: 文档索引（用于日志，从 1 开始）
/// - `config`: 配置
///
/// # 返回
/// 返回写入的报告路径
pub async fn process_document(
    agent: &dyn AgentClient,
    document: &Document,
    doc_index: usize,
    config: &Config,
) -> Result<PathBuf> {
    let ctx = DocumentCtx::new(document.id.clone(), doc_index);

    log_document_start(doc_index, &document.id, document.text.chars().count());

    // 显式创建会话，避免首问时的隐式建立
    agent
        .create_session(&ctx.session_id)
        .await
        .with_context(|| format!("文档 {} 会话创建失败", ctx.doc_id))?;

    // 执行八问流程（委托给 DocumentFlow）
    let flow = DocumentFlow::new(config);
    let content = flow.run(agent, document, &ctx).await?;

    // 报告一次性落盘
    let writer = ReportWriter::new(Path::new(&config.out_dir));
    let path = writer.write(&document.id, &content).await?;

    log_document_complete(doc_index, &path);

    Ok(path)
}

// ========== 日志辅助函数 ==========

fn log_document_start(doc_index: usize, doc_id: &str, char_count: usize) {
    info!("\n[文档 {}] {}", doc_index, "─".repeat(30));
    info!("[文档 {}] 开始处理", doc_index);
    info!("[文档 {}] 标识符: {}", doc_index, doc_id);
    info!("[文档 {}] 文本长度: {} 字符", doc_index, char_count);
}

fn log_document_complete(doc_index: usize, path: &Path) {
    info!("[文档 {}] ✅ 报告已写入: {}", doc_index, path.display());
}
