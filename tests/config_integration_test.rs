use hoppman::Converter;
use hoppman::config::ConfigLoader;
use hoppman::utils::{CollectionFormatter, OutputFormat};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 测试从实际配置文件加载
#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hoppman.toml");

    let config_content = r#"
[output]
indent = 4
dir = "collections"

[convert]
collection_name = "Imported"
request_name = "Unnamed request"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = ConfigLoader::load_from_path(&config_path).unwrap();
    assert_eq!(config.output.indent, 4);
    assert_eq!(config.output.dir, Some(PathBuf::from("collections")));
    assert_eq!(config.convert.collection_name, "Imported");
    assert_eq!(config.convert.request_name, "Unnamed request");
}

/// 测试非法配置文件报错
#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hoppman.toml");
    fs::write(&config_path, "[output]\nindent = \"wide\"\n").unwrap();

    let result = ConfigLoader::load_from_path(&config_path);
    assert!(result.is_err());
}

/// 测试向上查找配置文件
#[test]
fn test_find_upwards() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp_dir.path().join("hoppman.toml"), "").unwrap();

    let found = ConfigLoader::find_upwards(&nested).unwrap();
    assert_eq!(found, temp_dir.path().join("hoppman.toml"));
}

/// 测试配置影响转换结果
#[test]
fn test_config_drives_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hoppman.toml");
    fs::write(
        &config_path,
        "[output]\nindent = 4\n\n[convert]\ncollection_name = \"Imported\"\nrequest_name = \"Nameless\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    let converter = Converter::new(config.convert.clone());
    let (_, collection) = converter
        .convert_str(r#"{"endpoint": "example.com"}"#)
        .unwrap();

    assert_eq!(collection.info.name, "Imported");
    assert_eq!(collection.item[0].name(), "Nameless");

    let text = CollectionFormatter::new(OutputFormat::Pretty(config.output.indent))
        .format(&collection)
        .unwrap();
    assert!(text.starts_with("{\n    \"info\""));
}
