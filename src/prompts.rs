//! 提示词模块
//!
//! 八个固定的指导性问题、系统指令和单问题用户提示词的构建。
//! 提示词文本属于静态配置，构建函数为纯函数。

/// 八个固定的指导性问题（按报告顺序）
pub const QUESTIONS: [&str; 8] = [
    "1- What is the definition of this practice?",
    "2- Why is this practice beneficial or important?",
    "3- When should this practice be used?",
    "4- When is it justified to not use this practice?",
    "5- How should the correct methods for this practice be selected?",
    "6- How should the correct methods for this practice be implemented?",
    "7- How should the correct methods for this practice be evaluated?",
    "8- If it is justified to not use this practice, then what should be done as an alternative?",
];

/// 报告生成的系统指令
pub const SYSTEM_INSTRUCTION: &str = r###"You are writing a best-practice guidance report from a single provided document.

Hard rules (non-negotiable):
- Use ONLY the document content provided in the user message.
- Do NOT use outside knowledge, common sense, or assumptions.
- If the document does not explicitly support an answer or subsection, write exactly:
  Not found in document.
- Do not invent definitions, criteria, methods, or recommendations.
- Be long, detailed and hierarchical especially when the document actually contains enough detail.

Writing style (must match):
- Professional guidance-report tone.
- Structured and hierarchical.
- Use clear headings and subheadings.
- Prefer bullet lists with nested bullets where helpful.
- Avoid fluff. Be concrete and procedural when the doc supports it.
- Reuse the following section labels where relevant:
  • Key messages
  • Definition and purpose
  • Why this matters (benefits and importance)
  • When to use
  • When it may be justified not to use (exceptions / constraints)
  • How to select appropriate methods
  • How to implement
  • How to evaluate
  • If not used: alternatives / mitigation steps

Output formatting rules:
- Output MUST be valid Markdown.
- For each question, start with a level-2 heading: "## Q<N>: <question text>""###;

/// 文档内容的起始定界符
const DOC_BEGIN_MARKER: &str = "<<<BEGIN DOCUMENT";
/// 文档内容的结束定界符
const DOC_END_MARKER: &str = "END DOCUMENT>>>";

/// 清洗待嵌入的文档文本
///
/// 移除文本中出现的定界符序列，保证嵌入内容不会提前闭合自己的边界。
pub fn sanitize_document_text(text: &str) -> String {
    text.replace(DOC_BEGIN_MARKER, "").replace(DOC_END_MARKER, "")
}

/// 构建单个问题的用户提示词
///
/// 纯函数：相同输入总是产生相同输出，无副作用。
pub fn build_user_prompt(
    doc_id: &str,
    question_index: usize,
    question_text: &str,
    document_text: &str,
) -> String {
    format!(
        r###"Document ID: {doc_id}

You will answer ONE question using ONLY the document below.

Question:
{question_text}

Requirements for this question:
- Start with: "## Q{question_index}: {question_text}"
- Then write the answer to the question, unless "Not found in document."
- Then include the most relevant subsections from the allowed labels list.
- If a subsection is not supported by the document, write: Not found in document.

Allowed subsection labels (use only those that fit this question):
- Key messages
- Definition and purpose
- Why this matters (benefits and importance)
- When to use
- When it may be justified not to use (exceptions / constraints)
- How to select appropriate methods
- How to implement
- How to evaluate
- If not used: alternatives / mitigation steps

Document:
{begin}
{document}
{end}"###,
        doc_id = doc_id,
        question_index = question_index,
        question_text = question_text,
        begin = DOC_BEGIN_MARKER,
        document = sanitize_document_text(document_text),
        end = DOC_END_MARKER,
    )
}
