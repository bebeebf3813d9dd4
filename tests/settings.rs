use campaign_dashboard::format::NumberLocale;
use campaign_dashboard::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.window_size(), (1100.0, 760.0));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();
    let settings = Settings {
        debug_logging: true,
        log_file: Some("dashboard.log".into()),
        window_size: Some((900, 600)),
        dark_mode: true,
        locale: NumberLocale {
            grouping_separator: '.',
            decimal_separator: ',',
        },
    };
    settings.save(path).unwrap();
    assert_eq!(Settings::load(path).unwrap(), settings);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "dark_mode": true, "locale": { "grouping_separator": " " } }"#)
        .unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.dark_mode);
    assert!(!settings.debug_logging);
    assert_eq!(settings.locale.grouping_separator, ' ');
    assert_eq!(settings.locale.decimal_separator, '.');
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn invalid_locale_falls_back_to_default() {
    let settings = Settings {
        locale: NumberLocale {
            grouping_separator: ',',
            decimal_separator: ',',
        },
        ..Settings::default()
    };
    assert_eq!(settings.number_locale(), NumberLocale::default());
}

#[test]
fn tiny_window_is_clamped() {
    let settings = Settings {
        window_size: Some((10, 10)),
        ..Settings::default()
    };
    assert_eq!(settings.window_size(), (480.0, 360.0));
}
