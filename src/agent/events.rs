//! Agent 响应事件模型
//!
//! 运行时按序返回若干事件，每个事件可能携带零个或多个文本片段。
//! 提取逻辑不假设"一个事件恰好一个片段"。

use serde::{Deserialize, Serialize};

/// 一次提问返回的单个响应事件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentEvent {
    /// 事件内容，可能为空（例如纯状态事件）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<EventContent>,
}

/// 事件内容：一组文本片段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventContent {
    #[serde(default)]
    pub parts: Vec<EventPart>,
}

/// 单个片段，文本可能缺失
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AgentEvent {
    /// 由一段文本构造单片段事件
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(EventContent {
                parts: vec![EventPart {
                    text: Some(text.into()),
                }],
            }),
        }
    }
}

/// 从事件序列中提取完整回答文本
///
/// 按投递顺序收集所有非空片段，用换行拼接后去除首尾空白。
/// 没有内容的事件和没有文本的片段会被跳过。
pub fn extract_agent_text(events: &[AgentEvent]) -> String {
    let mut chunks: Vec<&str> = Vec::new();
    for event in events {
        let Some(content) = &event.content else {
            continue;
        };
        for part in &content.parts {
            if let Some(text) = &part.text {
                if !text.is_empty() {
                    chunks.push(text);
                }
            }
        }
    }
    chunks.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_joins_fragments_in_order() {
        let events = vec![
            AgentEvent::from_text("first"),
            AgentEvent {
                content: Some(EventContent {
                    parts: vec![
                        EventPart {
                            text: Some("second".to_string()),
                        },
                        EventPart {
                            text: Some("third".to_string()),
                        },
                    ],
                }),
            },
        ];

        assert_eq!(extract_agent_text(&events), "first\nsecond\nthird");
    }

    #[test]
    fn test_extract_skips_empty_events_and_parts() {
        let events = vec![
            AgentEvent { content: None },
            AgentEvent {
                content: Some(EventContent { parts: vec![] }),
            },
            AgentEvent {
                content: Some(EventContent {
                    parts: vec![
                        EventPart { text: None },
                        EventPart {
                            text: Some(String::new()),
                        },
                        EventPart {
                            text: Some("only this".to_string()),
                        },
                    ],
                }),
            },
        ];

        assert_eq!(extract_agent_text(&events), "only this");
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace() {
        let events = vec![AgentEvent::from_text("  answer  \n")];
        assert_eq!(extract_agent_text(&events), "answer");
    }

    #[test]
    fn test_extract_empty_sequence() {
        assert_eq!(extract_agent_text(&[]), "");
    }
}
