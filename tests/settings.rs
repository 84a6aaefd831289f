use serial_test::serial;
use tempfile::tempdir;

use window_translator::settings::{ApiType, Settings};

#[test]
fn defaults_when_file_is_missing() {
    let settings = Settings::load("does_not_exist.json").unwrap();
    assert_eq!(settings.api_type, ApiType::Google);
    assert_eq!(settings.source_lang, "auto");
    assert_eq!(settings.target_lang, "en");
    assert!(settings.skip_ascii_source);
    assert_eq!(settings.cooldown_ms, 1000);
}

#[test]
#[serial]
fn first_launch_writes_a_template_and_disables_the_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("translator_config.json");
    let path = path.to_str().unwrap();

    let loaded = Settings::load_or_create(path).unwrap();
    assert!(loaded.is_none(), "first launch should only write the template");

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("api_type"));
    assert!(content.contains("target_lang"));

    // Second launch picks the template up.
    let loaded = Settings::load_or_create(path).unwrap();
    assert!(loaded.is_some());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    let mut settings = Settings::default();
    settings.api_type = ApiType::Pot;
    settings.target_lang = "fr".into();
    settings.skip_ascii_source = false;
    settings.save(path).unwrap();

    let loaded = Settings::load(path).unwrap();
    assert_eq!(loaded.api_type, ApiType::Pot);
    assert_eq!(loaded.target_lang, "fr");
    assert!(!loaded.skip_ascii_source);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"target_lang": "de"}"#).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.target_lang, "de");
    assert_eq!(loaded.source_lang, "auto");
    assert_eq!(loaded.api_type, ApiType::Google);
}

#[test]
fn hotkey_accessors_fall_back_on_garbage() {
    let mut settings = Settings::default();
    settings.hotkey = Some("NotAKey+Q+Q".into());
    settings.quit_hotkey = Some("AlsoGarbage".into());

    let hk = settings.translate_hotkey();
    assert_eq!(hk.vk, 0x7A); // F11
    assert!(hk.shift);
    assert!(settings.quit_hotkey().is_none());
}

#[test]
fn configured_hotkeys_parse() {
    let mut settings = Settings::default();
    settings.hotkey = Some("Ctrl+Win+T".into());

    let hk = settings.translate_hotkey();
    assert_eq!(hk.vk, 'T' as u32);
    assert!(hk.ctrl && hk.win && !hk.shift);
}
