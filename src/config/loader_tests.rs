//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_bubblecell_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("bubblecell") && path_str.ends_with("config.toml"),
        "Path should contain 'bubblecell' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "bubblecell_test_config.toml",
        r#"
item_width = 320.0
utc_offset_minutes = 540
date_separator_height = 30.0
sender_name_height = 18.0
time_label_height = 16.0
failed_strip_height = 22.0
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.item_width, Some(320.0));
    assert_eq!(config.utc_offset_minutes, Some(540));
    assert_eq!(config.date_separator_height, Some(30.0));
    assert_eq!(config.sender_name_height, Some(18.0));
    assert_eq!(config.time_label_height, Some(16.0));
    assert_eq!(config.failed_strip_height, Some(22.0));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("bubblecell_test_invalid.toml", "item_width = [1, 2");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = write_temp_config("bubblecell_test_unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_accepts_partial_config() {
    let config_path = write_temp_config("bubblecell_test_partial.toml", "item_width = 414.0\n");

    let config = load_config_file(&config_path)
        .expect("Partial config should parse")
        .expect("File exists");
    assert_eq!(config.item_width, Some(414.0));
    assert_eq!(config.utc_offset_minutes, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_none_returns_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.item_width, 375.0);
    assert_eq!(resolved.utc_offset_minutes, 0);
    assert_eq!(resolved.label_heights, LabelHeights::default());
}

#[test]
fn merge_config_overrides_only_present_fields() {
    let resolved = merge_config(Some(ConfigFile {
        item_width: Some(500.0),
        time_label_height: Some(12.0),
        ..ConfigFile::default()
    }));

    assert_eq!(resolved.item_width, 500.0);
    assert_eq!(resolved.label_heights.time_label, 12.0);
    assert_eq!(resolved.label_heights.date_separator, 40.0);
    assert_eq!(resolved.label_heights.sender_name, 24.0);
    assert_eq!(resolved.label_heights.failed_strip, 24.0);
}

#[test]
#[serial(bubblecell_config)]
fn explicit_path_beats_env_var() {
    let explicit = write_temp_config("bubblecell_test_explicit.toml", "item_width = 111.0\n");
    let from_env = write_temp_config("bubblecell_test_env.toml", "item_width = 222.0\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("Should load")
        .expect("File exists");

    env::remove_var(CONFIG_ENV);
    assert_eq!(config.item_width, Some(111.0));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(bubblecell_config)]
fn env_var_path_used_without_explicit_path() {
    let from_env = write_temp_config("bubblecell_test_env_only.toml", "item_width = 222.0\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None)
        .expect("Should load")
        .expect("File exists");

    env::remove_var(CONFIG_ENV);
    assert_eq!(config.item_width, Some(222.0));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(bubblecell_config)]
fn env_item_width_overrides_file_value() {
    env::set_var(ITEM_WIDTH_ENV, "640");
    let resolved = apply_env_overrides(merge_config(Some(ConfigFile {
        item_width: Some(320.0),
        ..ConfigFile::default()
    })));
    env::remove_var(ITEM_WIDTH_ENV);

    assert_eq!(resolved.item_width, 640.0);
}

#[test]
#[serial(bubblecell_config)]
fn unparsable_env_item_width_is_ignored() {
    env::set_var(ITEM_WIDTH_ENV, "wide");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ITEM_WIDTH_ENV);

    assert_eq!(resolved.item_width, 375.0);
}

#[test]
fn cli_overrides_have_highest_precedence() {
    let base = merge_config(Some(ConfigFile {
        item_width: Some(320.0),
        utc_offset_minutes: Some(60),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(base.clone(), Some(800.0), None);
    assert_eq!(resolved.item_width, 800.0);
    assert_eq!(resolved.utc_offset_minutes, 60);

    let untouched = apply_cli_overrides(base.clone(), None, None);
    assert_eq!(untouched, base);
}

#[test]
fn validate_accepts_defaults() {
    assert_eq!(ResolvedConfig::default().validate(), Ok(()));
}

#[test]
fn validate_rejects_non_positive_width() {
    let config = ResolvedConfig {
        item_width: 0.0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "item_width",
            ..
        })
    ));
}

#[test]
fn validate_rejects_negative_label_height() {
    let mut config = ResolvedConfig::default();
    config.label_heights.sender_name = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "sender_name_height",
            ..
        })
    ));
}

#[test]
fn date_stamper_rejects_offset_of_a_day() {
    let config = ResolvedConfig {
        utc_offset_minutes: 24 * 60,
        ..ResolvedConfig::default()
    };
    assert!(config.date_stamper().is_err());

    let tokyo = ResolvedConfig {
        utc_offset_minutes: 540,
        ..ResolvedConfig::default()
    };
    let stamper = tokyo.date_stamper().expect("valid offset");
    assert_eq!(stamper.offset().local_minus_utc(), 540 * 60);
}
