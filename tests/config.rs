// SPDX-License-Identifier: MPL-2.0
//! Settings file loading as seen by the rest of the application.

use gobarber_client::config::{self, LOAD_ERROR_KEY};
use gobarber_client::ui::notifications::{NotificationProvider, TransitionTimings};
use gobarber_client::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn hand_written_settings_drive_the_notification_provider() {
    let temp_dir = tempdir().expect("create temp dir");
    fs::write(
        temp_dir.path().join("settings.toml"),
        r#"
[general]
language = "pt-BR"
theme_mode = "Dark"

[notifications]
expiry_ms = 5000
enter_ms = 150

[api]
base_url = "https://api.example.test/"
"#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.general.language.as_deref(), Some("pt-BR"));
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let provider = NotificationProvider::mount(&config.notifications);
    assert_eq!(provider.service().expiry(), Duration::from_millis(5000));

    let timings = TransitionTimings::from(&config.notifications);
    assert_eq!(timings.enter, Duration::from_millis(150));
    assert_eq!(
        timings.leave,
        Duration::from_millis(config::DEFAULT_TOAST_LEAVE_MS)
    );
}

#[test]
fn unreadable_settings_fall_back_with_warning() {
    let temp_dir = tempdir().expect("create temp dir");
    fs::write(temp_dir.path().join("settings.toml"), "[notifications\nexpiry_ms = ")
        .expect("write settings");

    let (config, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));

    assert_eq!(config, config::Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
}
