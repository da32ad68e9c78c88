//! Explicit path loading and error reporting.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::CheckerError;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_explicit_path() {
    let content = r#"
[line_length]
extension = "kt"
exclude = ["build/**"]
"#;
    let fs = MockFileSystem::new().with_file("/ci/pipeline.toml", content);

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/ci/pipeline.toml"))
        .unwrap();

    assert_eq!(config.line_length.extension, "kt");
    assert_eq!(config.line_length.exclude, vec!["build/**".to_string()]);
}

#[test]
fn explicit_path_ignores_discovered_files() {
    let fs = MockFileSystem::new()
        .with_file("/project/.pipeline-helper.toml", "[output]\ndirectory = \"a\"\n")
        .with_file("/ci/pipeline.toml", "[output]\ndirectory = \"b\"\n");

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/ci/pipeline.toml"))
        .unwrap();

    assert_eq!(config.output.directory, Path::new("b"));
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/project/.pipeline-helper.toml", "not toml [[[");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CheckerError::TomlParse(_)));
    assert!(err.is_usage_error());
}

#[test]
fn returns_error_for_unknown_key() {
    let fs = MockFileSystem::new()
        .with_file("/project/.pipeline-helper.toml", "[line_length]\nmax = 80\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CheckerError::TomlParse(_)));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .load_from_path(Path::new("/does/not/exist.toml"))
        .unwrap_err();

    assert!(
        matches!(err, CheckerError::ConfigRead { ref path, .. } if path == Path::new("/does/not/exist.toml"))
    );
}

#[test]
fn returns_error_for_invalid_values() {
    let fs = MockFileSystem::new()
        .with_file("/project/.pipeline-helper.toml", "[line_length]\nextension = \".java\"\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CheckerError::Config(_)));
}
