//! Agent 客户端接口
//!
//! 编排层只依赖这个窄接口，测试用桩实现替换真实后端。

use crate::agent::events::AgentEvent;
use anyhow::Result;
use async_trait::async_trait;

/// 外部 agent 运行时的消费接口
///
/// - `create_session` 必须幂等：同一会话重复创建不报错
/// - `ask` 返回事件序列，调用方负责提取文本
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// 显式创建会话
    async fn create_session(&self, session_id: &str) -> Result<()>;

    /// 在指定会话中提问，返回按序的响应事件
    async fn ask(&self, session_id: &str, prompt: &str) -> Result<Vec<AgentEvent>>;
}
