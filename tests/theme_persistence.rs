use devhub::app::{handle_event, Event};
use devhub::storage::{JsonPreferenceStore, PreferenceStore};
use devhub::{initialize, Action, Config, ThemeMode};
use std::path::Path;

fn config_for(path: &Path) -> Config {
    Config {
        preference_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    }
}

fn persisted(path: &Path) -> Option<String> {
    JsonPreferenceStore::new(path.to_path_buf())
        .unwrap()
        .read("devhub-theme")
        .unwrap()
}

#[test]
fn first_launch_defaults_to_dark_and_persists_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let state = initialize(&config_for(&path));
    assert_eq!(state.theme.get(), ThemeMode::Dark);
    drop(state);

    assert_eq!(persisted(&path).as_deref(), Some("dark"));
}

#[test]
fn toggled_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut state = initialize(&config_for(&path));
    let (render, actions) = handle_event(&mut state, &Event::ToggleTheme);
    assert!(render);
    assert_eq!(actions, vec![Action::ApplyTheme(ThemeMode::Light)]);
    drop(state);

    let state = initialize(&config_for(&path));
    assert_eq!(state.theme.get(), ThemeMode::Light);
}

#[test]
fn double_toggle_restores_mode_and_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut state = initialize(&config_for(&path));
    let before = (state.theme.get(), persisted(&path));

    handle_event(&mut state, &Event::ToggleTheme);
    handle_event(&mut state, &Event::ToggleTheme);

    assert_eq!((state.theme.get(), persisted(&path)), before);
}

#[test]
fn invalid_persisted_value_resolves_to_dark() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(
        &path,
        r#"{"version":1,"slots":{"devhub-theme":{"value":"neon","updated_at":0}}}"#,
    )
    .unwrap();

    let state = initialize(&config_for(&path));
    assert_eq!(state.theme.get(), ThemeMode::Dark);
    drop(state);

    assert_eq!(persisted(&path).as_deref(), Some("dark"));
}

#[test]
fn unreadable_preference_file_keeps_session_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut state = initialize(&config_for(&path));
    assert_eq!(state.theme.get(), ThemeMode::Dark);

    handle_event(&mut state, &Event::ToggleTheme);
    assert_eq!(state.theme.get(), ThemeMode::Light);
    drop(state);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn custom_slot_name_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let config = Config {
        preference_key: "site-theme".to_string(),
        ..config_for(&path)
    };

    let mut state = initialize(&config);
    handle_event(&mut state, &Event::ToggleTheme);
    drop(state);

    let store = JsonPreferenceStore::new(path).unwrap();
    assert_eq!(store.read("site-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(store.read("devhub-theme").unwrap(), None);
}
