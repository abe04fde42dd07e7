mod registry;
mod sniff;

pub use registry::{CommentSyntax, FileCategory, Language, LanguageRegistry, LineMarker};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
