/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入文档目录（.txt 文件）
    pub docs_dir: String,
    /// 报告输出目录
    pub out_dir: String,
    /// 同时处理的文档数量
    pub max_concurrency: usize,
    /// 会话记账使用的调用方标识
    pub user_id: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_dir: "data".to_string(),
            out_dir: "data/outputs".to_string(),
            max_concurrency: 3,
            user_id: "local_user".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            model_name: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            docs_dir: std::env::var("DOCS_DIR").unwrap_or(default.docs_dir),
            out_dir: std::env::var("OUT_DIR").unwrap_or(default.out_dir),
            max_concurrency: std::env::var("MAX_CONCURRENCY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrency),
            user_id: std::env::var("USER_ID").unwrap_or(default.user_id),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            model_name: std::env::var("MODEL_NAME").unwrap_or(default.model_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.docs_dir, "data");
        assert_eq!(config.out_dir, "data/outputs");
        assert_eq!(config.max_concurrency, 3);
        assert_eq!(config.user_id, "local_user");
        assert!(!config.verbose_logging);
    }
}
