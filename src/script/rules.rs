use regex::{Captures, NoExpand, Regex};

/// 替换方式
pub enum Replacer {
    /// 字面量替换，不展开 `$`
    Literal(&'static str),

    /// 支持 `${1}` 捕获组引用的模板
    Template(&'static str),

    /// 根据捕获组计算替换内容
    Compute(fn(&Captures) -> String),
}

/// 一条有序的脚本改写规则
pub struct RewriteRule {
    /// 规则名称（用于日志）
    pub name: &'static str,
    pattern: Regex,
    replacer: Replacer,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: &str, replacer: Replacer) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("rewrite rule pattern must be valid"),
            replacer,
        }
    }

    /// 方法名整词替换（ASCII 单词边界，点号按字面匹配）
    pub fn method(from: &'static str, to: &'static str) -> Self {
        let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(from));
        Self::new(from, &pattern, Replacer::Literal(to))
    }

    /// 在整段文本上应用本规则
    pub fn apply(&self, input: &str) -> String {
        match &self.replacer {
            Replacer::Literal(text) => self.pattern.replace_all(input, NoExpand(*text)),
            Replacer::Template(template) => self.pattern.replace_all(input, *template),
            Replacer::Compute(f) => self.pattern.replace_all(input, |caps: &Captures| f(caps)),
        }
        .into_owned()
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// Hoppscotch 到 Postman 的方法名映射表，按顺序应用
pub const METHOD_MAPPINGS: &[(&str, &str)] = &[
    ("pm.env.set", "pm.environment.set"),
    ("pm.env.get", "pm.environment.get"),
    ("pm.env.unset", "pm.environment.unset"),
    ("pm.test", "pm.test"),
    ("pm.expect", "pm.expect"),
    ("pm.response.status", "pm.response.status"),
    ("pm.response.headers", "pm.response.headers"),
    ("pm.request.url", "pm.request.url"),
    ("pm.request.headers", "pm.request.headers"),
];

fn status_class(caps: &Captures) -> String {
    match &caps[1] {
        "2" => ".to.be.success".to_string(),
        "3" => ".to.be.redirection".to_string(),
        "4" => ".to.be.clientError".to_string(),
        "5" => ".to.be.serverError".to_string(),
        _ => caps[0].to_string(),
    }
}

/// 构建完整的改写规则列表
///
/// 顺序有意义：`.not.toBe(..)` 必须在 `.toBe(..)` 之前处理
pub fn build_rules() -> Vec<RewriteRule> {
    let mut rules = vec![RewriteRule::new(
        "namespace",
        r"(?-u:\b)pw\.",
        Replacer::Literal("pm."),
    )];

    rules.extend(
        METHOD_MAPPINGS
            .iter()
            .map(|&(from, to)| RewriteRule::method(from, to)),
    );

    rules.extend([
        RewriteRule::new(
            "response_body",
            r"pm\.response\.body(?-u:\b)",
            Replacer::Literal("pm.response.json()"),
        ),
        RewriteRule::new(
            "status_level",
            r"\.toBeLevel([0-9]+)xx\(\)",
            Replacer::Compute(status_class),
        ),
        RewriteRule::new(
            "to_be_type",
            r#"\.toBeType\("((?-u:\w)+)"\)"#,
            Replacer::Template(r#".to.be.a("${1}")"#),
        ),
        RewriteRule::new(
            "to_have_length",
            r"\.toHaveLength\(([0-9]+)\)",
            Replacer::Template(".to.have.lengthOf(${1})"),
        ),
        RewriteRule::new(
            "to_include",
            r"\.toInclude\((.+?)\)",
            Replacer::Template(".to.include(${1})"),
        ),
        RewriteRule::new(
            "not_to_be",
            r"\.not\.toBe\((.+?)\)",
            Replacer::Template(".to.not.equal(${1})"),
        ),
        RewriteRule::new(
            "to_be",
            r"\.toBe\((.+?)\)",
            Replacer::Template(".to.equal(${1})"),
        ),
        RewriteRule::new(
            "json_accessor",
            r"pm\.response\.json\(\)(\.(?-u:\w)+)",
            Replacer::Template("pm.response.json()${1}"),
        ),
    ]);

    rules
}
