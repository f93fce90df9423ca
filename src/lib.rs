//! # Doc Guidance Report
//!
//! 一个批量生成文档指导报告的 Rust 应用程序：对目录中的每个文本文档，
//! 依次提出八个固定的指导性问题，由 LLM agent 作答，组装成一份
//! Markdown 报告。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Agent）
//! - `agent/` - 对外部 agent 运行时的窄接口封装
//! - `OpenAiAgent` - 唯一持有会话历史的实现，只暴露 create_session / ask
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个回答或单个文档
//! - `postprocess` - 空回答兜底 / 标题修复能力
//! - `ReportWriter` - 写报告文件能力
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文档"的完整处理流程
//! - `DocumentCtx` - 上下文封装（doc_id + 会话标识）
//! - `DocumentFlow` - 流程编排（八问串行：提示词 → 提问 → 后处理）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发和统计
//! - `orchestrator/document_processor` - 单个文档处理器，串起会话、流程和落盘
//!
//! ## 模块结构

pub mod agent;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use agent::{AgentClient, AgentEvent, OpenAiAgent};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::Document;
pub use orchestrator::{run_batch, App, BatchOutcome};
pub use workflow::{DocumentCtx, DocumentFlow};
