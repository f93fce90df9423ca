//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 批量加载文档（Vec<Document>）
//! - 控制并发数量（Semaphore）
//! - 按原始枚举顺序汇总结果
//!
//! ### `document_processor` - 单个文档处理器
//! - 创建文档会话
//! - 驱动 DocumentFlow 完成八问
//! - 写入报告文件
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Document>)
//!     ↓
//! document_processor (处理单个 Document)
//!     ↓
//! workflow::DocumentFlow (八问串行流程)
//!     ↓
//! services (能力层：postprocess / report / warn)
//!     ↓
//! agent (客户端层：AgentClient / OpenAiAgent)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{run_batch, App, BatchOutcome, DocumentOutcome};
pub use document_processor::process_document;
