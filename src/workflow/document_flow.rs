//! 文档处理流程 - 流程层
//!
//! 核心职责：定义"一个文档"的完整处理流程
//!
//! 流程顺序：
//! 1. 按固定顺序遍历八个问题（严格串行，不并行、不乱序）
//! 2. 每问：构建提示词 → agent 提问 → 提取文本 → 空回答兜底 → 标题修复
//! 3. 拼装整篇报告内容
//!
//! 问题 k+1 的提示词只在问题 k 的回答定稿后构建；同一会话贯穿八问，
//! 后面的问题可以受益于会话携带的上下文。

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::agent::{extract_agent_text, AgentClient};
use crate::config::Config;
use crate::models::Document;
use crate::prompts::{build_user_prompt, QUESTIONS};
use crate::services::{ensure_q_heading, normalize_or_fail_closed};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 文档处理流程
///
/// - 编排单个文档的八问流程
/// - 不持有任何资源（agent 由调用方传入）
/// - 只依赖业务能力（prompts / postprocess）
pub struct DocumentFlow {
    verbose_logging: bool,
}

impl DocumentFlow {
    /// 创建新的文档处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    /// 执行一个文档的完整八问流程，返回组装好的报告内容
    pub async fn run(
        &self,
        agent: &dyn AgentClient,
        document: &Document,
        ctx: &DocumentCtx,
    ) -> Result<String> {
        let mut report_parts: Vec<String> = Vec::new();
        report_parts.push(format!(
            "# Best-practice guidance report\n\n## Document: {}\n",
            ctx.doc_id
        ));

        for (index, q_text) in QUESTIONS.iter().enumerate() {
            let question_index = index + 1;
            info!(
                "[文档 {}] 处理第 {}/{} 个问题",
                ctx.doc_index,
                question_index,
                QUESTIONS.len()
            );

            let prompt =
                build_user_prompt(&ctx.doc_id, question_index, q_text, &document.text);

            let events = agent.ask(&ctx.session_id, &prompt).await.with_context(|| {
                format!("文档 {} 第 {} 问调用失败", ctx.doc_id, question_index)
            })?;

            if self.verbose_logging {
                if let Ok(dump) = serde_json::to_string(&events) {
                    debug!("[文档 {}] 原始事件: {}", ctx.doc_index, dump);
                }
            }

            let answer = extract_agent_text(&events);
            let answer = normalize_or_fail_closed(&answer);
            let answer = ensure_q_heading(&answer, question_index, q_text);

            if self.verbose_logging {
                info!(
                    "[文档 {}] Q{} 回答: {}",
                    ctx.doc_index,
                    question_index,
                    truncate_text(&answer, 80)
                );
            }

            report_parts.push(answer);
            report_parts.push("\n".to_string());
        }

        Ok(assemble_report(&report_parts))
    }
}

/// 把报告分段拼装为最终内容
///
/// 分段用换行连接，去掉首尾空白，保证以单个换行结尾。
fn assemble_report(parts: &[String]) -> String {
    format!("{}\n", parts.join("\n").trim())
}
