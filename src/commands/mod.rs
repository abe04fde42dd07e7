pub mod check;
pub mod context;

pub use check::run_check;
pub use context::{CheckContext, FileReader, FileSkipReason, RealFileReader};
