pub mod serialization;
pub mod types;

// Re-export commonly used types
pub use types::{
    KeyValue, SourceAuth, SourceBody, SourceDocument, SourceFolder, SourceNode, SourceRequest,
    SourceResponse, SourceRoot,
};

/// 从文件路径解析 Hoppscotch 文档
pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<SourceDocument> {
    let content = std::fs::read_to_string(path.as_ref())?;
    SourceDocument::parse(&content)
}
