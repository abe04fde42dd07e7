use super::*;
use crate::language::FileCategory;

fn detect(content: &str) -> Option<FileCategory> {
    LanguageRegistry::default()
        .detect(content.as_bytes())
        .map(|lang| lang.category)
}

#[test]
fn detects_java_after_header_comment() {
    let content = "/*\n * Copyright (c) 2024 Acme\n */\n\npackage org.acme;\n\npublic class Foo {}\n";
    assert_eq!(detect(content), Some(FileCategory::Java));
}

#[test]
fn detects_java_from_type_declaration() {
    assert_eq!(
        detect("public final class Util {\n}\n"),
        Some(FileCategory::Java)
    );
}

#[test]
fn detects_xml_declaration() {
    let content = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project/>\n";
    assert_eq!(detect(content), Some(FileCategory::Xml));
}

#[test]
fn detects_xml_starting_with_comment() {
    let content = "<!--\n    Copyright (c) 2024 Acme\n-->\n<project/>\n";
    assert_eq!(detect(content), Some(FileCategory::Xml));
}

#[test]
fn detects_xml_starting_with_root_element() {
    let content = "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n</project>\n";
    assert_eq!(detect(content), Some(FileCategory::Xml));
}

#[test]
fn detects_c_from_preprocessor() {
    let content = "/* header */\n#include <stdio.h>\n\nint main(void) { return 0; }\n";
    assert_eq!(detect(content), Some(FileCategory::C));
}

#[test]
fn ignores_file_extension_like_content() {
    // A Go file has a `package` line without a terminator.
    assert_eq!(detect("package main\n\nfunc main() {}\n"), None);
}

#[test]
fn markers_inside_comments_do_not_count() {
    let content = "// package org.acme;\n/* import java.util.List; */\nhello\n";
    assert_eq!(detect(content), None);
}

#[test]
fn empty_content_is_unknown() {
    assert_eq!(detect(""), None);
    assert_eq!(detect("\n\n   \n"), None);
}

#[test]
fn binary_content_is_unknown() {
    let bytes = [0x00u8, 0x01, 0x02, b'p', b'a', b'c', 0x00, 0xff];
    assert!(LanguageRegistry::default().detect(&bytes).is_none());
}

#[test]
fn byte_order_mark_is_skipped() {
    let content = "\u{feff}<?xml version=\"1.0\"?>\n<a/>\n";
    assert_eq!(detect(content), Some(FileCategory::Xml));
}
