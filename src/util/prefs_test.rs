use super::*;

fn temp_prefs() -> (tempfile::TempDir, Preferences) {
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::new(dir.path().join("prefs.json"));
    (dir, prefs)
}

#[test]
fn theme_defaults_to_light() {
    let (_dir, prefs) = temp_prefs();
    assert_eq!(prefs.theme(), ThemeMode::Light);
}

#[test]
fn set_theme_round_trips() {
    let (_dir, prefs) = temp_prefs();
    prefs.set_theme(ThemeMode::Dark);
    assert_eq!(prefs.theme(), ThemeMode::Dark);
}

#[test]
fn corrupt_file_falls_back_to_light() {
    let (dir, prefs) = temp_prefs();
    std::fs::write(dir.path().join("prefs.json"), "???").unwrap();
    assert_eq!(prefs.theme(), ThemeMode::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
}
