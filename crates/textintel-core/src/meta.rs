//! App manifest (`deepgram.toml`) loading.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "deepgram.toml";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("{0} file not found")]
    NotFound(String),

    #[error("Missing [meta] section in {0}")]
    MissingMeta(String),

    #[error("Failed to read metadata from {file}: {reason}")]
    Unreadable { file: String, reason: String },
}

/// Read the `[meta]` table of the manifest at `path`.
pub async fn load_metadata(path: &Path) -> Result<toml::Table, MetadataError> {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => MetadataError::NotFound(file.clone()),
        _ => MetadataError::Unreadable {
            file: file.clone(),
            reason: e.to_string(),
        },
    })?;

    let mut manifest: toml::Table = toml::from_str(&content).map_err(|e: toml::de::Error| {
        MetadataError::Unreadable {
            file: file.clone(),
            reason: e.message().to_string(),
        }
    })?;

    match manifest.remove("meta") {
        Some(toml::Value::Table(meta)) => Ok(meta),
        Some(_) => Err(MetadataError::Unreadable {
            file,
            reason: "[meta] is not a table".to_string(),
        }),
        None => Err(MetadataError::MissingMeta(file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_meta_table() {
        let file = manifest(
            "[meta]\ntitle = \"Text Intelligence\"\ntags = [\"rust\", \"axum\"]\n\n[build]\ncmd = \"make\"\n",
        );
        let meta = load_metadata(file.path()).await.unwrap();
        assert_eq!(meta["title"].as_str(), Some("Text Intelligence"));
        assert_eq!(meta["tags"].as_array().map(|a| a.len()), Some(2));
        assert!(!meta.contains_key("cmd"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_metadata(&dir.path().join("deepgram.toml")).await.unwrap_err();
        assert_eq!(err.to_string(), "deepgram.toml file not found");
    }

    #[tokio::test]
    async fn test_missing_meta_section() {
        let file = manifest("[build]\ncmd = \"make\"\n");
        let err = load_metadata(file.path()).await.unwrap_err();
        assert!(matches!(err, MetadataError::MissingMeta(_)));
        assert!(err.to_string().starts_with("Missing [meta] section in "));
    }

    #[tokio::test]
    async fn test_invalid_toml() {
        let file = manifest("[meta\ntitle = ");
        let err = load_metadata(file.path()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read metadata from "));
    }
}
