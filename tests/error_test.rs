use hoppman::{HoppmanError, Result, SourceDocument};

#[test]
fn test_invalid_input_message() {
    let err = HoppmanError::InvalidInput("expected value".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid JSON input. Please check your Hoppscotch JSON. (expected value)"
    );
}

#[test]
fn test_config_error() {
    let err = HoppmanError::Config("bad indent".to_string());
    assert_eq!(err.to_string(), "配置错误: bad indent");
}

#[test]
fn test_error_conversion_from_anyhow() {
    let anyhow_err = anyhow::anyhow!("test anyhow error");
    let hoppman_err: HoppmanError = anyhow_err.into();
    assert!(hoppman_err.to_string().contains("test anyhow error"));
}

#[test]
fn test_parse_failure_is_invalid_input() {
    fn parse() -> Result<SourceDocument> {
        SourceDocument::parse("[1, 2")
    }

    match parse() {
        Err(HoppmanError::InvalidInput(msg)) => assert!(!msg.is_empty()),
        _ => panic!("Expected InvalidInput"),
    }
}

#[test]
fn test_wrong_shape_is_invalid_input() {
    // requests 必须是数组
    let result = SourceDocument::parse(r#"{"folders": [{"requests": "nope"}]}"#);
    assert!(matches!(result, Err(HoppmanError::InvalidInput(_))));
}
