mod filter;

pub use filter::{FileFilter, IgnoreFilter};
