use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// 变量写法转换器：Hoppscotch `<<name>>` -> Postman `{{name}}`
pub struct VariableRewriter;

impl VariableRewriter {
    fn placeholder_regex() -> &'static Regex {
        static VAR_REGEX: OnceLock<Regex> = OnceLock::new();
        VAR_REGEX.get_or_init(|| Regex::new(r"<<((?-u:\w)+)>>").unwrap())
    }

    /// 替换文本中的所有 <<variable>> 占位符
    pub fn rewrite(text: &str) -> String {
        Self::placeholder_regex()
            .replace_all(text, "{{${1}}}")
            .into_owned()
    }

    /// 提取整个 JSON 文档中的变量名，键和字符串值都会扫描
    pub fn extract_from_value(value: &Value) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        Self::collect_value(value, &mut names);
        names
    }

    fn collect(text: &str, names: &mut BTreeSet<String>) {
        for caps in Self::placeholder_regex().captures_iter(text) {
            names.insert(caps[1].to_string());
        }
    }

    fn collect_value(value: &Value, names: &mut BTreeSet<String>) {
        match value {
            Value::String(s) => Self::collect(s, names),
            Value::Array(items) => {
                for item in items {
                    Self::collect_value(item, names);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    Self::collect(key, names);
                    Self::collect_value(item, names);
                }
            }
            _ => {}
        }
    }
}
