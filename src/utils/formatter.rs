use crate::Result;
use crate::config::types::DEFAULT_INDENT;
use crate::target::TargetCollection;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// 输出文件名后缀
pub const FILE_SUFFIX: &str = ".postman_collection.json";

/// JSON 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 缩进输出（空格数）
    Pretty(usize),
    /// 单行输出
    Compact,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Pretty(DEFAULT_INDENT)
    }
}

pub struct CollectionFormatter {
    format: OutputFormat,
}

impl CollectionFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 序列化集合
    pub fn format(&self, collection: &TargetCollection) -> Result<String> {
        match self.format {
            OutputFormat::Compact => Ok(serde_json::to_string(collection)?),
            OutputFormat::Pretty(indent) => Self::format_pretty(collection, indent),
        }
    }

    fn format_pretty<T: Serialize>(value: &T, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut serializer)?;
        // serde_json 只会写出合法的 UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// 便捷函数：按指定缩进输出 JSON
pub fn to_json(collection: &TargetCollection, indent: usize) -> Result<String> {
    CollectionFormatter::new(OutputFormat::Pretty(indent)).format(collection)
}

/// 生成输出文件名：`{name|"untitled"}.postman_collection.json`
///
/// 只有缺失或空串才回退到 untitled；名称里的路径分隔符替换为 `_`
pub fn output_file_name(collection_name: Option<&str>) -> String {
    let name = collection_name
        .filter(|s| !s.is_empty())
        .unwrap_or("untitled");
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}{}", safe, FILE_SUFFIX)
}
