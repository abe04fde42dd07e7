use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::CopyrightGuardError;

#[test]
fn skip_reason_display() {
    assert_eq!(FileSkipReason::NotFound.to_string(), "file not found");
    assert_eq!(
        FileSkipReason::NoTemplate(FileCategory::Xml).to_string(),
        "no template for file type (text/xml)"
    );
    assert_eq!(FileSkipReason::Ignored.to_string(), "ignored by configuration");
}

#[test]
fn real_reader_distinguishes_files_and_directories() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("A.java");
    fs::write(&file, "package a;\n").unwrap();

    let reader = RealFileReader;
    assert!(reader.is_file(&file));
    assert!(!reader.is_file(dir.path()));
    assert!(!reader.is_file(&dir.path().join("missing.java")));
    assert_eq!(reader.read(&file).unwrap(), b"package a;\n");
}

#[test]
fn load_config_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guard.toml");
    fs::write(&path, "bypass_year_check = true\nignore = [\"target/\"]\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert!(config.bypass_year_check);
    assert_eq!(config.ignore, vec!["target/".to_string()]);
}

#[test]
fn load_config_rejects_missing_explicit_path() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, CopyrightGuardError::FileRead { .. }));
}

#[test]
fn context_from_default_config() {
    let dir = TempDir::new().unwrap();
    let ctx = CheckContext::from_config(&Config::default(), dir.path(), 2025).unwrap();

    assert!(ctx.templates.get(FileCategory::Java).is_some());
    assert!(ctx.templates.get(FileCategory::Xml).is_some());
    assert!(ctx.templates.get(FileCategory::C).is_none());
}

#[test]
fn context_rejects_invalid_template() {
    let config = Config {
        template_c: "Copyright {holder}".to_string(),
        ..Config::default()
    };
    let dir = TempDir::new().unwrap();

    let result = CheckContext::from_config(&config, dir.path(), 2025);
    assert!(matches!(
        result,
        Err(CopyrightGuardError::InvalidTemplate { .. })
    ));
}

#[test]
fn context_rejects_invalid_ignore_pattern() {
    let config = Config {
        ignore: vec!["src/{a,b".to_string()],
        ..Config::default()
    };
    let dir = TempDir::new().unwrap();

    let result = CheckContext::from_config(&config, dir.path(), 2025);
    assert!(matches!(
        result,
        Err(CopyrightGuardError::InvalidPattern { .. })
    ));
}
