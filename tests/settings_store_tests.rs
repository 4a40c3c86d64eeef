//! YAML settings persistence

use wiki_excerpt::config::{
    Settings, SettingsManager, SettingsStore, SettingsUpdate, YamlSettingsStore,
    DEFAULT_PARAGRAPH_TEMPLATE,
};

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = YamlSettingsStore::new(dir.path().join("settings.yml"));

    let manager = SettingsManager::load(Box::new(store)).unwrap();

    assert_eq!(manager.settings(), &Settings::default());
}

#[test]
fn test_partial_file_merges_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    std::fs::write(&path, "language: de-AT\nboldSearchTerm: false\n").unwrap();

    let manager = SettingsManager::load(Box::new(YamlSettingsStore::new(&path))).unwrap();
    let settings = manager.settings();

    assert_eq!(settings.language, "de");
    assert!(!settings.bold_search_term);
    assert!(settings.use_paragraph_template);
    assert_eq!(settings.paragraph_template, DEFAULT_PARAGRAPH_TEMPLATE);
}

#[test]
fn test_update_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.yml");

    let mut manager = SettingsManager::load(Box::new(YamlSettingsStore::new(&path))).unwrap();
    manager
        .update(SettingsUpdate::parse("template", r"{{text}}\n-- {{url}}").unwrap())
        .unwrap();
    manager
        .update(SettingsUpdate::UseParagraphTemplate(false))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("useParagraphTemplate: false"));

    let reloaded = YamlSettingsStore::new(&path).load().unwrap();
    assert_eq!(reloaded.template.as_deref(), Some("{{text}}\n-- {{url}}"));
    assert_eq!(reloaded.use_paragraph_template, Some(false));
}

#[test]
fn test_invalid_yaml_is_settings_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    std::fs::write(&path, "boldSearchTerm: [unclosed\n").unwrap();

    let err = YamlSettingsStore::new(&path).load().unwrap_err();

    assert!(err.to_string().starts_with("Settings error:"));
}

#[test]
fn test_reset_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    std::fs::write(&path, "language: ja\n").unwrap();

    let mut manager = SettingsManager::load(Box::new(YamlSettingsStore::new(&path))).unwrap();
    assert_eq!(manager.settings().language, "ja");
    manager.reset().unwrap();

    let reloaded = SettingsManager::load(Box::new(YamlSettingsStore::new(&path))).unwrap();
    assert_eq!(reloaded.settings(), &Settings::default());
}
