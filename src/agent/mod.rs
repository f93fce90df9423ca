//! Agent 客户端层
//!
//! 对外部 LLM agent 运行时的窄接口封装：
//! - `AgentClient` - 两个能力：创建会话、按会话提问
//! - `events` - 响应事件模型与文本提取
//! - `OpenAiAgent` - 基于 async-openai 的生产实现

pub mod client;
pub mod events;
pub mod openai_agent;

pub use client::AgentClient;
pub use events::{extract_agent_text, AgentEvent, EventContent, EventPart};
pub use openai_agent::OpenAiAgent;
