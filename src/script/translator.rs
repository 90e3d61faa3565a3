use crate::script::rules::{RewriteRule, build_rules};
use std::sync::OnceLock;

/// 脚本翻译器：把 Hoppscotch 的 `pw.*` 脚本改写为 Postman 的 `pm.*` 脚本
///
/// 只做基于正则的文本替换，不认识的写法原样保留
pub struct ScriptTranslator;

impl ScriptTranslator {
    /// 全局共享的改写规则（按顺序）
    pub fn rules() -> &'static [RewriteRule] {
        static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
        RULES.get_or_init(build_rules)
    }

    /// 翻译整段脚本，空脚本返回空串
    pub fn translate(script: &str) -> String {
        if script.is_empty() {
            return String::new();
        }

        Self::rules().iter().fold(script.to_string(), |buffer, rule| {
            if rule.is_match(&buffer) {
                tracing::trace!(rule = rule.name, "applying script rewrite");
                rule.apply(&buffer)
            } else {
                buffer
            }
        })
    }

    /// 翻译并按行拆分，空行保留
    pub fn translate_lines(script: &str) -> Vec<String> {
        Self::translate(script)
            .split('\n')
            .map(str::to_string)
            .collect()
    }
}
