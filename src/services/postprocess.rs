//! 回答后处理 - 业务能力层
//!
//! 两个纯函数，按固定顺序组合：
//! 1. 空回答兜底（宁可显式"未找到"也不留空）
//! 2. 标题修复（缺失时补上 "## Q<N>: ..." 标题）
//!
//! 两个函数对任意字符串输入都是全函数，且各自幂等。

/// 空回答的兜底文本
pub const NOT_FOUND_TEXT: &str = "Not found in document.";

/// 空回答兜底
///
/// 去除首尾空白后为空时，替换为固定的"未找到"文本；否则原样返回去白结果。
pub fn normalize_or_fail_closed(answer: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        NOT_FOUND_TEXT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 标题修复
///
/// 要求的标题是 `## Q<index>: <question_text>`：
/// - 回答中任意位置已包含该标题 → 原样返回
/// - 回答（去掉行首空白后）已以 "## " 开头 → 视为模型自带标题，原样返回
/// - 否则在前面补上标题和一个空行
///
/// 这是尽力修复而非校验：不核对已有标题的编号与内容。
pub fn ensure_q_heading(answer: &str, q_index: usize, q_text: &str) -> String {
    let wanted = format!("## Q{}: {}", q_index, q_text);
    if answer.contains(&wanted) {
        return answer.to_string();
    }
    if answer.trim_start().starts_with("## ") {
        return answer.to_string();
    }
    format!("{}\n\n{}", wanted, answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_fails_closed() {
        assert_eq!(normalize_or_fail_closed(""), NOT_FOUND_TEXT);
        assert_eq!(normalize_or_fail_closed("   \n\t  "), NOT_FOUND_TEXT);
    }

    #[test]
    fn test_normalize_keeps_content() {
        assert_eq!(normalize_or_fail_closed("  answer  "), "answer");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_or_fail_closed("   ");
        let twice = normalize_or_fail_closed(&once);
        assert_eq!(once, twice);

        let once = normalize_or_fail_closed("real answer");
        let twice = normalize_or_fail_closed(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_heading_untouched_when_present() {
        let answer = "## Q3: some question\n\ndetails";
        assert_eq!(ensure_q_heading(answer, 3, "some question"), answer);
    }

    #[test]
    fn test_heading_present_anywhere_is_kept() {
        let answer = "intro line\n## Q3: some question\ndetails";
        assert_eq!(ensure_q_heading(answer, 3, "some question"), answer);
    }

    #[test]
    fn test_own_level2_heading_is_accepted() {
        // 模型给了自己的二级标题，不强行替换
        let answer = "  ## My own heading\n\ndetails";
        assert_eq!(ensure_q_heading(answer, 1, "question"), answer);
    }

    #[test]
    fn test_heading_prepended_when_missing() {
        let result = ensure_q_heading("plain answer", 2, "why?");
        assert_eq!(result, "## Q2: why?\n\nplain answer");
    }

    #[test]
    fn test_heading_enforcement_is_idempotent() {
        let once = ensure_q_heading("plain answer", 2, "why?");
        let twice = ensure_q_heading(&once, 2, "why?");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_composed_pipeline_on_empty_answer() {
        // 空回答 → 兜底文本 → 补标题
        let normalized = normalize_or_fail_closed("");
        let headed = ensure_q_heading(&normalized, 3, "some question");
        assert_eq!(headed, format!("## Q3: some question\n\n{}", NOT_FOUND_TEXT));
    }
}
