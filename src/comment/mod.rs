mod extractor;

pub use extractor::{Comment, CommentExtractor};
