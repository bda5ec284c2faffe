use std::fs;
use std::path::{Path, PathBuf};

use landing_core::ContentCatalog;
use landing_logging::{landing_info, landing_warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content listing {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse content listing {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

pub(crate) fn load_catalog(path: &Path) -> Result<ContentCatalog, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: ContentCatalog = ron::from_str(&content).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    landing_info!(
        "Loaded {} projects and {} posts from {:?}",
        catalog.projects.len(),
        catalog.posts.len(),
        path
    );
    Ok(catalog)
}

/// Loads the listing if one was configured; a broken listing degrades to an
/// empty page section rather than aborting.
pub(crate) fn load_catalog_or_empty(path: Option<&Path>) -> ContentCatalog {
    let Some(path) = path else {
        return ContentCatalog::default();
    };
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            landing_warn!("{}", err);
            ContentCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LISTING: &str = r#"(
        projects: [
            (slug: "harbor", title: "Harbor", collection: Some("infra")),
            (slug: "quill", title: "Quill"),
        ],
        posts: [
            (slug: "hello", title: "Hello", date: Some("2024-03-01")),
        ],
    )"#;

    #[test]
    fn parses_ron_listing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.ron");
        fs::write(&path, LISTING).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.projects.len(), 2);
        assert_eq!(catalog.projects[1].collection, None);
        assert_eq!(catalog.posts[0].date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_catalog(&temp.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn broken_listing_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.ron");
        fs::write(&path, "(projects: [oops").unwrap();

        assert_eq!(
            load_catalog_or_empty(Some(&path)),
            ContentCatalog::default()
        );
        assert_eq!(load_catalog_or_empty(None), ContentCatalog::default());
    }
}
