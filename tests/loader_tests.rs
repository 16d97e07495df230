//! Loading declarations from files and presets

use sitestyle::config::loader::DEFAULT_PRESET;
use sitestyle::{ConfigLoader, DeclarationSource, StyleConfigProvider, StyleError, ThemeValue};
use std::io::Write;

fn write_declaration(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("sitestyle-")
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_file_and_resolve() {
    let file = write_declaration(
        r##"
important: true
content:
  - "layouts/**/*.html"
safelist: [pagination, page-item]
darkMode: class
theme:
  extend:
    colors:
      brand: "#123458"
    backgroundColor:
      brand: "theme(colors.brand)"
plugins:
  - "@tailwindcss/typography"
  - "@tailwindcss/typography"
"##,
    );

    let config = ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap();
    assert!(config.important);
    assert_eq!(config.plugins.len(), 1);
    assert_eq!(
        config.token("backgroundColor.brand").unwrap(),
        ThemeValue::from("#123458")
    );
}

#[test]
fn test_unquoted_numeric_scale_keys() {
    let file = write_declaration(
        r##"
content: ["layouts/**/*.{html,md}"]
theme:
  extend:
    colors:
      brand:
        50: "#f0f4f8"
        200: "#c8d6e5"
        500: "#123458"
    textColor:
      muted: "theme(colors.brand.200)"
"##,
    );

    let config = ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(
        config.token("colors.brand.500").unwrap(),
        ThemeValue::from("#123458")
    );
    assert_eq!(
        config.token("textColor.muted").unwrap(),
        ThemeValue::from("#c8d6e5")
    );
    assert!(config.scans(std::path::Path::new("layouts/posts/single.md")));
}

#[test]
fn test_css_variable_colors_in_file() {
    let file = write_declaration(
        r#"
content: ["layouts/**/*.html"]
theme:
  extend:
    colors:
      accent: "var(--accent)"
      brand: "rgb(var(--brand) / <alpha-value>)"
"#,
    );

    let config = ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(
        config.token("colors.accent").unwrap(),
        ThemeValue::from("var(--accent)")
    );
}

#[test]
fn test_unterminated_brace_in_file() {
    let file = write_declaration("content: [\"layouts/*.{html,md\"]\n");
    match ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap_err()
    {
        StyleError::ConfigValidation { field, .. } => assert_eq!(field, "content[0]"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_unknown_keys_tolerated() {
    let file = write_declaration(
        r#"
content: ["layouts/**/*.html"]
prefix: "tw-"
future:
  option: true
"#,
    );

    let declaration = ConfigLoader::load_file(file.path()).unwrap();
    assert_eq!(declaration.unknown_keys, vec!["future", "prefix"]);
    assert!(declaration.resolve().is_ok());
}

#[test]
fn test_invalid_dark_mode_in_file() {
    let file = write_declaration("darkMode: selector\n");
    let err = ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_unresolved_reference_in_file() {
    let file = write_declaration(
        r#"
theme:
  extend:
    typography:
      invert:
        css:
          color: "theme(colors.grey.200)"
"#,
    );
    let err = ConfigLoader::load_file(file.path())
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, StyleError::UnresolvedToken { .. }));
}

#[test]
fn test_malformed_yaml_reports_path() {
    let file = write_declaration("content: [\"unterminated\n");
    let err = ConfigLoader::load_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to parse style declaration"));
}

#[test]
fn test_discover_file_in_site_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitestyle.yaml");
    std::fs::write(&path, "darkMode: class\n").unwrap();

    let source = ConfigLoader::discover(None, None, dir.path());
    assert_eq!(source, DeclarationSource::File(path));
}

#[test]
fn test_discover_falls_back_to_preset() {
    let dir = tempfile::tempdir().unwrap();
    // SAFETY: remove_var is unsafe in Rust 2024 due to potential data races.
    // No other test in this binary reads or writes this variable.
    unsafe {
        std::env::remove_var(sitestyle::config::loader::CONFIG_ENV_VAR);
    }
    let source = ConfigLoader::discover(None, None, dir.path());
    assert_eq!(source, DeclarationSource::Preset(DEFAULT_PRESET.to_string()));

    let declaration = ConfigLoader::load(&source).unwrap();
    assert!(declaration.resolve().is_ok());
}
