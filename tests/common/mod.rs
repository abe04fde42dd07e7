#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::Datelike;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the copyright-guard binary.
///
/// `RUST_LOG` is cleared so the log level comes from the command line only.
#[macro_export]
macro_rules! copyright_guard {
    () => {{
        let mut cmd =
            assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("copyright-guard"));
        cmd.env_remove("RUST_LOG");
        cmd
    }};
}

/// Simple header template used by most fixtures.
pub const SIMPLE_CONFIG: &str = r#"
template_java = "Copyright (c) {years} {holder}"
template_xml = "Copyright (c) {years} {holder}"
template_c = "Copyright (c) {years} {holder}"
"#;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A Java source whose first comment is `Copyright (c) <years> Acme Corp`.
pub fn java_source(years: &str) -> String {
    format!("/* Copyright (c) {years} Acme Corp */\npackage com.acme;\n\npublic class A {{}}\n")
}

/// An XML document whose first comment is `Copyright (c) <years> Acme Corp`.
pub fn xml_source(years: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- Copyright (c) {years} Acme Corp -->\n<project/>\n"
    )
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.copyright-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".copyright-guard.toml", content);
    }

    /// Creates a Java file with a header for the current year.
    pub fn create_valid_java(&self, relative_path: &str) {
        self.create_file(relative_path, &java_source(&current_year().to_string()));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
