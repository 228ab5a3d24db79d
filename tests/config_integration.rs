// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config};
use iced_gallery::domain::gallery::GalleryConfig;
use iced_gallery::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, loaded.general.language.as_deref());
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-close"), "Close");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, loaded.general.language.as_deref());
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-close"), "Fermer");
}

#[test]
fn gallery_section_round_trips_through_settings_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[gallery]
wrap_around = false
use_large_images = false
box_width = 0.5
"#,
    )
    .expect("write settings");

    let loaded = config::load_from_path(&path).expect("valid settings");
    let overrides = loaded.gallery_overrides().expect("valid section");
    let gallery = GalleryConfig::from_overrides(&overrides);

    assert!(!gallery.wrap_around);
    assert!(!gallery.use_large_images);
    assert!((gallery.box_width.value() - 0.5).abs() < f32::EPSILON);
    assert_eq!(gallery.full_source("x.jpg"), "assets/images/small/x.jpg");

    config::save_to_path(&loaded, &path).expect("save");
    let reloaded = config::load_from_path(&path).expect("reload");
    assert_eq!(reloaded, loaded);
}

#[test]
fn unknown_gallery_option_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[gallery]\nwrap_arround = true\n",
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("config-load-error"));
}

#[test]
fn missing_settings_file_is_not_a_warning() {
    let dir = tempdir().expect("temp dir");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}
