mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
    validate_config,
};
pub use model::{Config, DEFAULT_JAVA_TEMPLATE, DEFAULT_XML_TEMPLATE};
