mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIRECTORY, LineLengthConfig, OutputConfig,
};
