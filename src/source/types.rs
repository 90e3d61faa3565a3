use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::source::serialization::{
    lenient_list, lenient_list_option, lenient_map, lenient_object, lenient_option,
    lenient_string, truthy,
};
use crate::{HoppmanError, Result};

/// 解析后的 Hoppscotch 导出文档
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// 集合名称（可能缺失）
    pub name: Option<String>,

    /// 文档根结构
    pub root: SourceRoot,

    /// 原始 JSON，用于占位符提取
    raw: Value,
}

/// 文档根结构
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRoot {
    /// 文档带 `folders` 字段：根请求 + 子目录
    Collection {
        requests: Vec<SourceRequest>,
        folders: Vec<SourceNode>,
    },

    /// 文档本身就是一个节点（目录或单个请求）
    Node(SourceNode),
}

impl SourceDocument {
    /// 从文本解析文档
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            tracing::error!(error = %e, "failed to parse Hoppscotch JSON");
            HoppmanError::InvalidInput(e.to_string())
        })?;
        Self::from_value(value)
    }

    /// 从已解析的 JSON 构建文档
    ///
    /// 顶层为数组时（Hoppscotch 批量导出），每个元素都视为一个目录
    pub fn from_value(value: Value) -> Result<Self> {
        let (name, root) = match &value {
            Value::Object(map) => {
                let name = map
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);

                let root = if map.get("folders").is_some_and(|v| !v.is_null()) {
                    #[derive(Deserialize)]
                    struct CollectionRoot {
                        #[serde(default, deserialize_with = "lenient_list::deserialize")]
                        requests: Vec<SourceRequest>,
                        #[serde(default, deserialize_with = "lenient_list::deserialize")]
                        folders: Vec<SourceNode>,
                    }

                    let parsed = CollectionRoot::deserialize(&value).map_err(invalid_input)?;
                    SourceRoot::Collection {
                        requests: parsed.requests,
                        folders: parsed.folders,
                    }
                } else {
                    SourceRoot::Node(SourceNode::deserialize(&value).map_err(invalid_input)?)
                };
                (name, root)
            }
            Value::Array(_) => {
                let folders: Vec<SourceNode> =
                    lenient_list::deserialize(&value).map_err(invalid_input)?;
                (
                    None,
                    SourceRoot::Collection {
                        requests: Vec::new(),
                        folders,
                    },
                )
            }
            other => {
                let message = format!("expected a JSON object, found {}", json_kind(other));
                tracing::error!("{}", message);
                return Err(HoppmanError::InvalidInput(message));
            }
        };

        Ok(Self {
            name,
            root,
            raw: value,
        })
    }

    /// 集合名称
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 原始 JSON
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

fn invalid_input(err: serde_json::Error) -> HoppmanError {
    tracing::error!(error = %err, "Hoppscotch JSON has an unexpected shape");
    HoppmanError::InvalidInput(err.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 目录树节点
#[derive(Debug, Clone, PartialEq)]
pub enum SourceNode {
    Folder(SourceFolder),
    Request(SourceRequest),
}

impl SourceNode {
    /// 节点是否为目录：带有非 null 的 `requests` 或 `folders` 字段
    pub fn is_folder_value(value: &Value) -> bool {
        ["requests", "folders"]
            .iter()
            .any(|key| value.get(key).is_some_and(|v| !v.is_null()))
    }
}

impl<'de> Deserialize<'de> for SourceNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = Value::deserialize(deserializer)?;
        if Self::is_folder_value(&value) {
            SourceFolder::deserialize(value)
                .map(SourceNode::Folder)
                .map_err(D::Error::custom)
        } else {
            SourceRequest::deserialize(value)
                .map(SourceNode::Request)
                .map_err(D::Error::custom)
        }
    }
}

/// Hoppscotch 目录
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SourceFolder {
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub name: String,

    /// 直接子请求；None 表示字段缺失
    #[serde(deserialize_with = "lenient_list_option::deserialize")]
    pub requests: Option<Vec<SourceRequest>>,

    /// 子目录；None 表示字段缺失
    #[serde(deserialize_with = "lenient_list_option::deserialize")]
    pub folders: Option<Vec<SourceNode>>,
}

/// Hoppscotch 请求
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceRequest {
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub name: String,

    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub method: String,

    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub endpoint: String,

    #[serde(deserialize_with = "lenient_list::deserialize")]
    pub params: Vec<KeyValue>,

    #[serde(deserialize_with = "lenient_list::deserialize")]
    pub headers: Vec<KeyValue>,

    #[serde(deserialize_with = "lenient_object::deserialize")]
    pub auth: Option<SourceAuth>,

    #[serde(deserialize_with = "lenient_object::deserialize")]
    pub body: Option<SourceBody>,

    #[serde(deserialize_with = "lenient_option::deserialize")]
    pub pre_request_script: Option<String>,

    #[serde(deserialize_with = "lenient_option::deserialize")]
    pub test_script: Option<String>,

    /// 保存的响应示例（名称 -> 响应）
    #[serde(deserialize_with = "lenient_map::deserialize")]
    pub responses: BTreeMap<String, SourceResponse>,
}

/// 参数或 Header 条目
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub key: String,

    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub value: String,

    #[serde(deserialize_with = "truthy::deserialize")]
    pub active: bool,

    #[serde(deserialize_with = "lenient_option::deserialize")]
    pub description: Option<String>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>, active: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            active,
            description: None,
        }
    }
}

/// 认证配置，只读取转换需要的字段
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceAuth {
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub auth_type: String,

    #[serde(deserialize_with = "truthy::deserialize")]
    pub auth_active: bool,

    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub token: String,
}

/// 请求体
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceBody {
    #[serde(deserialize_with = "lenient_option::deserialize")]
    pub content_type: Option<String>,

    /// 原始内容；form-data 等非字符串内容保持为 JSON 值
    pub body: Option<Value>,
}

impl SourceBody {
    /// 文本形式的请求体内容（非空字符串）
    pub fn text(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// 保存的响应示例，字段原样透传
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SourceResponse {
    pub status: Option<Value>,
    pub code: Option<Value>,
    pub headers: Option<Value>,
    pub body: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_invalid_json() {
        let result = SourceDocument::parse("{not json");
        assert!(matches!(result, Err(HoppmanError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_scalar_rejected() {
        let result = SourceDocument::parse("42");
        assert!(matches!(result, Err(HoppmanError::InvalidInput(_))));
    }

    #[test]
    fn test_document_with_folders() {
        let doc = SourceDocument::from_value(json!({
            "name": "Demo",
            "folders": [{"name": "Users", "requests": []}],
            "requests": [{"name": "Ping", "endpoint": "example.com/ping"}]
        }))
        .unwrap();

        assert_eq!(doc.name(), Some("Demo"));
        match doc.root {
            SourceRoot::Collection { requests, folders } => {
                assert_eq!(requests.len(), 1);
                assert_eq!(folders.len(), 1);
                assert!(matches!(folders[0], SourceNode::Folder(_)));
            }
            _ => panic!("Expected collection root"),
        }
    }

    #[test]
    fn test_document_without_folders_is_a_node() {
        let doc = SourceDocument::from_value(json!({
            "name": "Single",
            "method": "GET",
            "endpoint": "example.com"
        }))
        .unwrap();

        match doc.root {
            SourceRoot::Node(SourceNode::Request(req)) => {
                assert_eq!(req.method, "GET");
                assert_eq!(req.endpoint, "example.com");
            }
            _ => panic!("Expected single request root"),
        }
    }

    #[test]
    fn test_null_folders_are_ignored_for_discrimination() {
        let doc = SourceDocument::from_value(json!({
            "name": "Req",
            "folders": null,
            "requests": null,
            "endpoint": "x.io"
        }))
        .unwrap();
        assert!(matches!(doc.root, SourceRoot::Node(SourceNode::Request(_))));
    }

    #[test]
    fn test_array_document() {
        let doc = SourceDocument::from_value(json!([
            {"name": "A", "requests": []},
            {"name": "B", "folders": []}
        ]))
        .unwrap();

        assert_eq!(doc.name(), None);
        match doc.root {
            SourceRoot::Collection { requests, folders } => {
                assert!(requests.is_empty());
                assert_eq!(folders.len(), 2);
            }
            _ => panic!("Expected collection root"),
        }
    }

    #[test]
    fn test_request_lenient_fields() {
        let req: SourceRequest = serde_json::from_value(json!({
            "name": null,
            "headers": [{"key": "X-Id", "value": 7, "active": true}],
            "params": null,
            "auth": {"authType": "bearer", "authActive": true, "token": "<<token>>"},
            "body": {"contentType": "application/json", "body": "{}"},
            "testScript": null,
            "responses": {"ok": {"status": "OK", "code": 200, "body": "{}"}}
        }))
        .unwrap();

        assert_eq!(req.name, "");
        assert_eq!(req.headers[0].value, "7");
        assert!(req.params.is_empty());
        assert_eq!(req.auth.as_ref().unwrap().token, "<<token>>");
        assert_eq!(req.body.as_ref().unwrap().text(), Some("{}"));
        assert_eq!(req.test_script, None);
        assert_eq!(req.responses["ok"].code, Some(json!(200)));
    }

    #[test]
    fn test_request_mistyped_fields_fall_back() {
        let req: SourceRequest = serde_json::from_value(json!({
            "name": "r",
            "headers": [{"key": "a", "value": "b", "active": "true"}, "junk"],
            "params": {"page": 1},
            "auth": "none",
            "body": 12,
            "responses": ["not", "a", "map"]
        }))
        .unwrap();

        assert_eq!(req.headers.len(), 1);
        assert!(req.headers[0].active);
        assert!(req.params.is_empty());
        assert_eq!(req.auth, None);
        assert_eq!(req.body, None);
        assert!(req.responses.is_empty());
    }

    #[test]
    fn test_auth_active_is_truthy() {
        let auth: SourceAuth =
            serde_json::from_value(json!({"authType": "bearer", "authActive": 1})).unwrap();
        assert!(auth.auth_active);

        let auth: SourceAuth =
            serde_json::from_value(json!({"authType": "bearer", "authActive": ""})).unwrap();
        assert!(!auth.auth_active);
    }

    #[test]
    fn test_non_string_body_has_no_text() {
        let body: SourceBody = serde_json::from_value(json!({
            "contentType": "multipart/form-data",
            "body": [{"key": "file", "value": ""}]
        }))
        .unwrap();
        assert_eq!(body.text(), None);
    }
}
