// SPDX-License-Identifier: MPL-2.0
use std::path::Path;
use std::time::Duration;

use tempfile::tempdir;
use wavedrop::config::{self, Config};
use wavedrop::i18n::fluent::I18n;
use wavedrop::infrastructure::HttpUploader;

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    write_config(&english, &path);

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("upload-error-not-audio"), "Please upload an audio file");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    write_config(&french, &path);

    let reloaded = config::load_from_path(&path).expect("Failed to load updated config");
    let i18n = I18n::new(None, &reloaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_ne!(i18n.tr("upload-error-not-audio"), "Please upload an audio file");
}

#[test]
fn cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn upload_section_configures_the_uploader() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        r#"
[upload]
endpoint = "https://decode.example.com/v1/audio"
field_name = "file"
reset_delay_ms = 1500
request_timeout_secs = 30

[notifications]
duration_ms = 5000
"#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.upload.reset_delay(), Duration::from_millis(1500));
    assert_eq!(config.upload.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.notifications.duration().as_millis(), 5000);

    let uploader = HttpUploader::from_config(&config.upload).expect("valid endpoint");
    assert_eq!(uploader.endpoint().as_str(), "https://decode.example.com/v1/audio");
    assert_eq!(uploader.field_name(), "file");
}

#[test]
fn unusable_endpoint_is_reported() {
    let mut config = Config::default();
    config.upload.endpoint = Some("not a url".to_string());

    let err = HttpUploader::from_config(&config.upload).unwrap_err();
    assert_eq!(err.i18n_key(), "error-upload-invalid-request");
}
