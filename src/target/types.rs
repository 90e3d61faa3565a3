use serde::Serialize;
use serde_json::Value;

/// Postman v2.1 collection schema URI
pub const SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// 脚本类型标记
pub const SCRIPT_TYPE: &str = "text/javascript";

/// 请求体与响应示例的语言提示
pub const PREVIEW_LANGUAGE: &str = "json";

/// Postman 集合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetCollection {
    pub info: CollectionInfo,
    pub item: Vec<TargetItem>,
    pub variable: Vec<CollectionVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub schema: String,
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
}

impl CollectionInfo {
    pub fn new(name: impl Into<String>, postman_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: SCHEMA_URL.to_string(),
            postman_id: postman_id.into(),
        }
    }
}

/// 集合变量，值一律为空串
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionVariable {
    pub key: String,
    pub value: String,
}

impl CollectionVariable {
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
        }
    }
}

/// 目录树节点：目录或请求
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TargetItem {
    Folder(TargetFolder),
    Request(Box<TargetRequest>),
}

impl TargetItem {
    pub fn name(&self) -> &str {
        match self {
            TargetItem::Folder(folder) => &folder.name,
            TargetItem::Request(request) => &request.name,
        }
    }

    pub fn as_folder(&self) -> Option<&TargetFolder> {
        match self {
            TargetItem::Folder(folder) => Some(folder),
            TargetItem::Request(_) => None,
        }
    }

    pub fn as_request(&self) -> Option<&TargetRequest> {
        match self {
            TargetItem::Folder(_) => None,
            TargetItem::Request(request) => Some(request.as_ref()),
        }
    }
}

impl From<TargetRequest> for TargetItem {
    fn from(request: TargetRequest) -> Self {
        TargetItem::Request(Box::new(request))
    }
}

impl From<TargetFolder> for TargetItem {
    fn from(folder: TargetFolder) -> Self {
        TargetItem::Folder(folder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetFolder {
    pub name: String,
    pub item: Vec<TargetItem>,
}

/// Postman 请求条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRequest {
    pub name: String,
    pub event: Vec<Event>,
    pub request: RequestDefinition,
    pub response: Vec<ResponseExample>,
}

/// 脚本生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Listen {
    Prerequest,
    Test,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub listen: Listen,
    pub script: Script,
}

impl Event {
    pub fn new(listen: Listen, exec: Vec<String>) -> Self {
        Self {
            listen,
            script: Script {
                exec,
                script_type: SCRIPT_TYPE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub script_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestDefinition {
    pub method: String,
    pub header: Vec<Header>,
    pub url: TargetUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TargetUrl {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub host: Vec<String>,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<QueryParam>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// 认证配置，目前只支持 bearer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Auth {
    Bearer { bearer: Vec<AuthAttribute> },
}

impl Auth {
    pub fn bearer(token: impl Into<String>) -> Self {
        Auth::Bearer {
            bearer: vec![AuthAttribute {
                key: "token".to_string(),
                value: token.into(),
                value_type: "string".to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthAttribute {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

impl Body {
    /// raw 模式请求体，语言固定为 json
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: content.into(),
            options: BodyOptions {
                raw: RawOptions {
                    language: PREVIEW_LANGUAGE.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawOptions {
    pub language: String,
}

/// 响应示例
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseExample {
    pub name: String,
    #[serde(rename = "originalRequest")]
    pub original_request: RequestDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    pub header: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(rename = "_postman_previewlanguage")]
    pub preview_language: String,
}
