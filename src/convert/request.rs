use crate::config::ConvertSettings;
use crate::convert::endpoint::{parse_endpoint, strip_leading_slashes};
use crate::script::ScriptTranslator;
use crate::source::{KeyValue, SourceAuth, SourceRequest};
use crate::target::types::PREVIEW_LANGUAGE;
use crate::target::{
    Auth, Body, Event, Header, Listen, QueryParam, RequestDefinition, ResponseExample,
    TargetRequest, TargetUrl,
};
use crate::variable::VariableRewriter;

/// 单个请求的转换器
#[derive(Debug, Clone)]
pub struct RequestConverter {
    default_name: String,
}

impl Default for RequestConverter {
    fn default() -> Self {
        Self::new(&ConvertSettings::default())
    }
}

impl RequestConverter {
    pub fn new(settings: &ConvertSettings) -> Self {
        Self {
            default_name: settings.request_name.clone(),
        }
    }

    /// 把一个 Hoppscotch 请求转换为 Postman 请求
    pub fn convert(&self, source: &SourceRequest) -> TargetRequest {
        let name = if source.name.is_empty() {
            self.default_name.clone()
        } else {
            source.name.clone()
        };

        let request = RequestDefinition {
            method: source.method.clone(),
            header: convert_headers(&source.headers),
            url: convert_url(&source.endpoint, &source.params),
            auth: source.auth.as_ref().and_then(convert_auth),
            body: source
                .body
                .as_ref()
                .and_then(|body| body.text())
                .map(|text| Body::raw(VariableRewriter::rewrite(text))),
        };

        let event = convert_events(source);

        let response = source
            .responses
            .iter()
            .map(|(response_name, saved)| ResponseExample {
                name: response_name.clone(),
                original_request: request.clone(),
                status: saved.status.clone(),
                code: saved.code.clone(),
                header: saved
                    .headers
                    .clone()
                    .filter(|h| !h.is_null())
                    .unwrap_or_else(|| serde_json::Value::Array(Vec::new())),
                body: saved.body.clone(),
                preview_language: PREVIEW_LANGUAGE.to_string(),
            })
            .collect();

        tracing::debug!(
            name = %name,
            method = %request.method,
            url = %request.url.raw,
            "converted request"
        );

        TargetRequest {
            name,
            event,
            request,
            response,
        }
    }
}

/// 便捷函数：使用默认设置转换请求
pub fn convert_request(source: &SourceRequest) -> TargetRequest {
    RequestConverter::default().convert(source)
}

fn convert_url(endpoint: &str, params: &[KeyValue]) -> TargetUrl {
    let endpoint = VariableRewriter::rewrite(endpoint);
    let parsed = parse_endpoint(strip_leading_slashes(&endpoint));

    let query: Vec<QueryParam> = params
        .iter()
        .filter(|param| param.active)
        .map(|param| QueryParam {
            key: VariableRewriter::rewrite(&param.key),
            value: VariableRewriter::rewrite(&param.value),
        })
        .collect();

    TargetUrl {
        raw: parsed.raw,
        protocol: parsed.protocol,
        host: parsed.host,
        path: parsed.path,
        query: (!query.is_empty()).then_some(query),
    }
}

fn convert_headers(headers: &[KeyValue]) -> Vec<Header> {
    headers
        .iter()
        .filter(|header| header.active)
        .map(|header| Header {
            key: VariableRewriter::rewrite(&header.key),
            value: VariableRewriter::rewrite(&header.value),
            description: header.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn convert_auth(auth: &SourceAuth) -> Option<Auth> {
    if !auth.auth_active {
        return None;
    }

    match auth.auth_type.as_str() {
        "bearer" => Some(Auth::bearer(VariableRewriter::rewrite(&auth.token))),
        other => {
            // 其他认证方式暂不映射
            tracing::debug!(auth_type = other, "dropping unsupported auth type");
            None
        }
    }
}

fn convert_events(source: &SourceRequest) -> Vec<Event> {
    [
        (Listen::Prerequest, source.pre_request_script.as_deref()),
        (Listen::Test, source.test_script.as_deref()),
    ]
    .into_iter()
    .filter_map(|(listen, script)| {
        script
            .filter(|s| !s.is_empty())
            .map(|s| Event::new(listen, ScriptTranslator::translate_lines(s)))
    })
    .collect()
}
