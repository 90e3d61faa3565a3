use serde::Deserialize;
use std::path::PathBuf;

/// 集合名称缺失时使用的默认值
pub const DEFAULT_COLLECTION_NAME: &str = "Converted Collection";

/// 请求名称缺失时使用的默认值
pub const DEFAULT_REQUEST_NAME: &str = "Untitled Request";

/// 默认缩进（空格数）
pub const DEFAULT_INDENT: usize = 2;

/// 完整的配置文件（hoppman.toml）
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct HoppmanConfig {
    /// 输出相关配置
    #[serde(default)]
    pub output: OutputSettings,

    /// 转换相关配置
    #[serde(default)]
    pub convert: ConvertSettings,
}

/// 输出配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// JSON 缩进空格数
    pub indent: usize,

    /// 生成文件所在目录
    pub dir: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            dir: None,
        }
    }
}

/// 转换配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConvertSettings {
    /// info.name 的回退值
    pub collection_name: String,

    /// 请求名的回退值
    pub request_name: String,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            request_name: DEFAULT_REQUEST_NAME.to_string(),
        }
    }
}
