/// 拆分后的请求地址
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedEndpoint {
    /// 原始输入
    pub raw: String,

    /// 协议（http / https），未写明时为 None
    pub protocol: Option<String>,

    /// 主机名按 `.` 拆分后的各段
    pub host: Vec<String>,

    /// 非空路径段
    pub path: Vec<String>,
}

/// 去掉开头所有的 `/`
pub fn strip_leading_slashes(endpoint: &str) -> &str {
    endpoint.trim_start_matches('/')
}

/// 把 endpoint 拆成协议、主机段与路径段
///
/// 不做 URL 合法性校验，变量占位符会原样保留在对应的段里
pub fn parse_endpoint(endpoint: &str) -> ParsedEndpoint {
    let mut rest = strip_leading_slashes(endpoint);
    let mut protocol = None;

    for scheme in ["http", "https"] {
        if let Some(after) = rest
            .strip_prefix(scheme)
            .and_then(|r| r.strip_prefix("://"))
        {
            protocol = Some(scheme.to_string());
            rest = after;
            break;
        }
    }

    let (host_token, path_part) = rest.split_once('/').unwrap_or((rest, ""));

    let host = if host_token.contains('.') {
        host_token.split('.').map(str::to_string).collect()
    } else {
        vec![host_token.to_string()]
    };

    let path = path_part
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    ParsedEndpoint {
        raw: endpoint.to_string(),
        protocol,
        host,
        path,
    }
}
