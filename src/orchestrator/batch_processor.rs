//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和并发控制。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、创建 agent 客户端
//! 2. **批量加载**：读取所有待处理的文档（`Vec<Document>`）
//! 3. **并发控制**：使用 Semaphore 限制同时在途的文档数量
//! 4. **失败隔离**：单个文档失败只计入统计，不影响其他文档
//! 5. **顺序汇总**：结果按原始枚举顺序收集，与完成顺序无关
//! 6. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **连续入场**：许可在任务内获取，空出一个名额就放行下一个文档
//! - **共享状态最小化**：文档任务之间唯一共享的可变资源是信号量计数
//! - **向下委托**：委托 document_processor 处理单个文档

use crate::agent::{AgentClient, OpenAiAgent};
use crate::config::Config;
use crate::error::{AppError, ConfigError};
use crate::models::{self, Document};
use crate::orchestrator::document_processor;
use crate::services::WarnWriter;
use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    agent: Arc<dyn AgentClient>,
}

/// 单个文档的处理结果
#[derive(Debug)]
pub struct DocumentOutcome {
    pub doc_id: String,
    /// 成功时为报告路径，失败时为原因描述
    pub result: std::result::Result<PathBuf, String>,
}

/// 批次处理结果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 按原始枚举顺序排列的逐文档结果
    pub outcomes: Vec<DocumentOutcome>,
    pub success: usize,
    pub failed: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> crate::Result<Self> {
        if config.max_concurrency == 0 {
            return Err(AppError::from(ConfigError::InvalidConcurrency {
                value: config.max_concurrency,
            }));
        }

        log_startup(&config);

        let agent: Arc<dyn AgentClient> = Arc::new(OpenAiAgent::new(&config));

        Ok(Self { config, agent })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的文档；目录为空是致命的配置错误，在任何 agent 调用之前报出
        info!("\n📁 正在扫描待处理的文档...");
        let documents = models::load_txt_documents(&self.config.docs_dir).await?;

        let total = documents.len();
        log_documents_loaded(total, self.config.max_concurrency);

        tokio::fs::create_dir_all(&self.config.out_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.config.out_dir))?;

        // 处理所有文档
        let outcome = run_batch(self.agent.clone(), documents, &self.config).await?;

        // 按原始枚举顺序报告已写入的报告路径
        for doc in &outcome.outcomes {
            if let Ok(path) = &doc.result {
                let resolved = path.canonicalize().unwrap_or_else(|_| path.clone());
                info!("Wrote: {}", resolved.display());
            }
        }

        // 输出最终统计
        print_final_stats(&outcome);

        if outcome.failed > 0 {
            anyhow::bail!("{} 个文档处理失败", outcome.failed);
        }

        Ok(())
    }
}

/// 处理一批文档
///
/// 每个文档一个任务；许可在任务内获取，保证同时在途的文档数不超过
/// `max_concurrency`，并在任务的所有退出路径上随 drop 释放。
/// 单个文档的失败被隔离：记录日志、写入 warn.txt、计入统计，
/// 其余文档照常完成。
pub async fn run_batch(
    agent: Arc<dyn AgentClient>,
    documents: Vec<Document>,
    config: &Config,
) -> Result<BatchOutcome> {
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency));
    let total = documents.len();
    let warn_writer = WarnWriter::with_path(Path::new(&config.out_dir).join("warn.txt"));

    // 为每个文档创建并发任务
    let mut doc_ids = Vec::with_capacity(total);
    let mut handles = Vec::with_capacity(total);

    for (idx, document) in documents.into_iter().enumerate() {
        let doc_index = idx + 1;
        let semaphore = semaphore.clone();
        let agent = agent.clone();
        let config = config.clone();

        doc_ids.push(document.id.clone());
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .context("并发信号量已关闭")?;

            document_processor::process_document(agent.as_ref(), &document, doc_index, &config)
                .await
        }));
    }

    // 按原始顺序等待所有任务完成（完成顺序不影响结果顺序）
    let joined = join_all(handles).await;

    let mut outcome = BatchOutcome::default();
    for ((idx, doc_id), join_result) in doc_ids.into_iter().enumerate().zip(joined) {
        let doc_index = idx + 1;
        let result = match join_result {
            Ok(Ok(path)) => {
                outcome.success += 1;
                Ok(path)
            }
            Ok(Err(e)) => {
                error!("[文档 {}] ❌ 处理过程中发生错误: {:#}", doc_index, e);
                outcome.failed += 1;
                Err(format!("{:#}", e))
            }
            Err(e) => {
                error!("[文档 {}] 任务执行失败: {}", doc_index, e);
                outcome.failed += 1;
                Err(e.to_string())
            }
        };

        if let Err(reason) = &result {
            if let Err(e) = warn_writer.write(&doc_id, reason) {
                error!("[文档 {}] warn.txt 写入失败: {}", doc_index, e);
            }
        }

        outcome.outcomes.push(DocumentOutcome { doc_id, result });
    }

    Ok(outcome)
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量文档报告模式");
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 最大并发数: {}", config.max_concurrency);
    info!("🤖 模型: {}", config.model_name);
    info!("{}", "=".repeat(60));
}

fn log_documents_loaded(total: usize, max_concurrency: usize) {
    info!("✓ 找到 {} 个待处理的文档", total);
    info!("📋 同时在途的文档不超过 {} 个", max_concurrency);
    info!("💡 每个文档内部的八个问题严格串行\n");
}

fn print_final_stats(outcome: &BatchOutcome) {
    let total = outcome.outcomes.len();
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", outcome.success, total);
    info!("❌ 失败: {}", outcome.failed);
    info!("{}", "=".repeat(60));
}
