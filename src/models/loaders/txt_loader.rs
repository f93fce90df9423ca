//! 文本文档加载器
//!
//! 从目录中读取所有 .txt 文件并转换为 Document 列表

use crate::error::{AppError, ConfigError, FileError, Result};
use crate::models::document::Document;
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// 从目录中加载所有 .txt 文档
///
/// - 标识符取文件名去掉扩展名
/// - 按文件名排序，保证枚举顺序确定
/// - 内容按 UTF-8 读取，非法字节做替换处理
/// - 目录中没有任何 .txt 文件时返回致命的配置错误
/// - 标识符重复时返回错误（见 DESIGN.md 的重复标识符策略）
pub async fn load_txt_documents(folder_path: &str) -> Result<Vec<Document>> {
    let folder = PathBuf::from(folder_path);

    let mut entries = fs::read_dir(&folder).await.map_err(|e| {
        AppError::from(FileError::ReadFailed {
            path: folder.clone(),
            source: e,
        })
    })?;

    // 先收集路径再排序，read_dir 本身不保证顺序
    let mut txt_files: Vec<PathBuf> = Vec::new();
    loop {
        let entry = entries.next_entry().await.map_err(|e| {
            AppError::from(FileError::ReadFailed {
                path: folder.clone(),
                source: e,
            })
        })?;
        let Some(entry) = entry else { break };

        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            txt_files.push(path);
        }
    }
    txt_files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    if txt_files.is_empty() {
        return Err(ConfigError::NoDocumentsFound {
            dir: folder_path.to_string(),
        }
        .into());
    }

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut documents = Vec::with_capacity(txt_files.len());

    for path in txt_files {
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        // 大小写不敏感地判重，否则报告文件在大小写不敏感的文件系统上会互相覆盖
        if !seen_ids.insert(id.to_lowercase()) {
            return Err(FileError::DuplicateDocumentId { id }.into());
        }

        let bytes = fs::read(&path).await.map_err(|e| {
            AppError::from(FileError::ReadFailed {
                path: path.clone(),
                source: e,
            })
        })?;
        let text = String::from_utf8_lossy(&bytes).to_string();

        debug!("已加载文档 {} ({} 字符)", id, text.chars().count());
        documents.push(Document::new(id, text));
    }

    info!("✓ 共加载 {} 个文档", documents.len());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs as std_fs;

    #[test]
    fn test_load_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("b_doc.txt"), "second").unwrap();
        std_fs::write(dir.path().join("a_doc.txt"), "first").unwrap();
        std_fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let docs =
            tokio_test::block_on(load_txt_documents(dir.path().to_str().unwrap())).unwrap();

        assert_eq!(docs.len(), 2, "非 .txt 文件应被忽略");
        assert_eq!(docs[0].id, "a_doc");
        assert_eq!(docs[0].text, "first");
        assert_eq!(docs[1].id, "b_doc");
        assert_eq!(docs[1].text, "second");
    }

    #[test]
    fn test_empty_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let result = tokio_test::block_on(load_txt_documents(dir.path().to_str().unwrap()));

        assert!(matches!(
            result,
            Err(AppError::Config(
                crate::error::ConfigError::NoDocumentsFound { .. }
            ))
        ));
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");

        let result = tokio_test::block_on(load_txt_documents(missing.to_str().unwrap()));

        assert!(matches!(
            result,
            Err(AppError::File(crate::error::FileError::ReadFailed { .. }))
        ));
    }

    #[test]
    fn test_case_insensitive_duplicate_stem_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("Policy.txt"), "upper").unwrap();
        std_fs::write(dir.path().join("policy.txt"), "lower").unwrap();

        let result = tokio_test::block_on(load_txt_documents(dir.path().to_str().unwrap()));

        // 大小写不敏感的文件系统上只会存在一个文件，此时加载应成功；
        // 两个文件都存在时必须报重复错误
        match result {
            Ok(docs) => assert_eq!(docs.len(), 1),
            Err(e) => assert!(matches!(
                e,
                AppError::File(crate::error::FileError::DuplicateDocumentId { .. })
            )),
        }
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("raw.txt"), [0x68, 0x69, 0xFF, 0x21]).unwrap();

        let docs =
            tokio_test::block_on(load_txt_documents(dir.path().to_str().unwrap())).unwrap();

        assert_eq!(docs[0].id, "raw");
        assert!(docs[0].text.starts_with("hi"));
        assert!(docs[0].text.ends_with('!'));
    }
}
