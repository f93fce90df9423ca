//! OpenAI 兼容后端的 Agent 实现
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）
//!
//! ## 会话语义
//! - 每个文档一个会话，会话内保留完整对话历史
//! - 后续问题会带上之前的问答轮次，保证上下文连续
//! - `create_session` 幂等；`ask` 对未知会话退化为隐式创建

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::agent::client::AgentClient;
use crate::agent::events::{AgentEvent, EventContent, EventPart};
use crate::config::Config;
use crate::error::AgentError;
use crate::prompts::SYSTEM_INSTRUCTION;

/// 生产用 Agent 客户端
///
/// 职责：
/// - 调用 LLM API 回答单个提示词
/// - 维护按会话隔离的对话历史
/// - 不出现 Document / 问题编号
/// - 不关心流程顺序
pub struct OpenAiAgent {
    client: Client<OpenAIConfig>,
    model_name: String,
    user_id: String,
    sessions: Mutex<HashMap<String, Vec<ChatCompletionRequestMessage>>>,
}

impl OpenAiAgent {
    /// 创建新的 Agent 客户端
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.model_name.clone(),
            user_id: config.user_id.clone(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// 会话在存储中的键，按调用方标识做隔离
    fn session_key(&self, session_id: &str) -> String {
        format!("{}:{}", self.user_id, session_id)
    }
}

#[async_trait]
impl AgentClient for OpenAiAgent {
    async fn create_session(&self, session_id: &str) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        // 幂等：已存在的会话保持原有历史
        sessions.entry(self.session_key(session_id)).or_default();
        debug!("会话就绪: {}", session_id);
        Ok(())
    }

    async fn ask(&self, session_id: &str, prompt: &str) -> Result<Vec<AgentEvent>> {
        debug!("调用 LLM API，模型: {}，会话: {}", self.model_name, session_id);
        debug!("提示词长度: {} 字符", prompt.len());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        // 构建消息列表：系统指令 + 会话历史 + 本次提问
        let mut messages = Vec::new();

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_INSTRUCTION)
            .build()?;
        messages.push(ChatCompletionRequestMessage::System(system_msg));

        {
            let mut sessions = self.sessions.lock().await;
            // 未知会话兜底：首次消息时隐式建立
            let history = sessions.entry(self.session_key(session_id)).or_default();
            messages.extend(history.iter().cloned());
        }

        messages.push(ChatCompletionRequestMessage::User(user_msg.clone()));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(4096u32)
            .build()?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AgentError::InvocationFailed {
                session_id: session_id.to_string(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        // 每个 choice 的内容作为同一事件的一个片段，保持投递顺序
        let mut parts = Vec::new();
        let mut reply_chunks = Vec::new();
        for choice in &response.choices {
            if let Some(content) = &choice.message.content {
                parts.push(EventPart {
                    text: Some(content.clone()),
                });
                reply_chunks.push(content.as_str());
            }
        }
        let reply_text = reply_chunks.join("\n");

        // 把本轮问答写回会话历史
        {
            let mut sessions = self.sessions.lock().await;
            let history = sessions.entry(self.session_key(session_id)).or_default();
            history.push(ChatCompletionRequestMessage::User(user_msg));
            if !reply_text.is_empty() {
                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(reply_text)
                    .build()?;
                history.push(ChatCompletionRequestMessage::Assistant(assistant_msg));
            }
        }

        Ok(vec![AgentEvent {
            content: Some(EventContent { parts }),
        }])
    }
}
