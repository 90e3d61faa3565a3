use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 宽松的字符串字段：null 视为空串，数字/布尔按字面转为字符串
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        })
    }
}

/// 可选字符串：null 与缺失都视为 None，其余同 lenient_string
pub mod lenient_option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }
}

/// 布尔开关按真值判断：null、false、0、空串为假，其余为真
pub mod truthy {
    use super::*;

    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(is_truthy(&Value::deserialize(deserializer)?))
    }
}

/// 可选的嵌套对象：不是对象或无法解码时视为 None
pub mod lenient_object {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(_) => T::deserialize(value).ok(),
            _ => None,
        })
    }
}

/// 列表字段：不是数组时为空，无法解码的元素跳过
pub mod lenient_list {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}

/// 可缺失的列表：null 与缺失为 None，不是数组时为空列表
pub mod lenient_list_option {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        lenient_list::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

/// 名称到对象的映射：不是对象时为空，无法解码的条目跳过
pub mod lenient_map {
    use super::*;
    use std::collections::BTreeMap;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, item)| T::deserialize(item).ok().map(|item| (key, item)))
                .collect(),
            _ => BTreeMap::new(),
        })
    }
}
