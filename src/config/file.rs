//
//  bitbucket-kit
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Small helpers used by [`Settings`](super::Settings) for reading and writing
//! the settings file. Write operations create parent directories first.

use std::path::Path;

use anyhow::Result;

/// Reads the raw content of a configuration file.
pub fn read_config_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Returns `true` if a configuration file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("bbkit").join("config.toml");

        assert!(!config_exists(&path));
        write_config_file(&path, "user = \"bob\"\n").unwrap();

        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "user = \"bob\"\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config_file(&dir.path().join("missing.toml")).is_err());
    }
}
