use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Site;

/// Errors raised while loading or validating the site corpus.
///
/// All of these are fatal at startup: the engine cannot serve requests
/// without a valid corpus snapshot. During a live reload they are surfaced
/// to the caller and the previous snapshot keeps serving.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site at position {index} has an empty site_id")]
    EmptyId { index: usize },

    #[error("duplicate site_id in corpus: {0}")]
    DuplicateId(String),
}

/// Loads the site corpus from a JSON file.
///
/// The document store itself is an external collaborator; this file is the
/// record set it hands us. Read once at startup and again on explicit reload.
pub async fn load_sites(path: &Path) -> Result<Vec<Site>, CorpusError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sites(&bytes)
}

/// Parses and validates a JSON array of site records.
pub fn parse_sites(bytes: &[u8]) -> Result<Vec<Site>, CorpusError> {
    let sites: Vec<Site> = serde_json::from_slice(bytes)?;
    validate(&sites)?;
    Ok(sites)
}

/// Checks the corpus invariants: every site has a non-empty `site_id` and
/// ids are unique within the snapshot. Field fallbacks and shape tolerance
/// live in the serde layer; the scoring core never re-checks these.
fn validate(sites: &[Site]) -> Result<(), CorpusError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(sites.len());
    for (index, site) in sites.iter().enumerate() {
        if site.site_id.trim().is_empty() {
            return Err(CorpusError::EmptyId { index });
        }
        if !seen.insert(site.site_id.as_str()) {
            return Err(CorpusError::DuplicateId(site.site_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_corpus() {
        let json = br#"[
            { "site_id": "a", "name": "Alpha", "type": "temple", "tags": ["ancient"] },
            { "site_id": "b", "name": "Beta", "location": "Delhi" }
        ]"#;

        let sites = parse_sites(json).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].category, "temple");
        assert_eq!(sites[1].location_text, "Delhi");
    }

    #[test]
    fn test_parse_rejects_empty_site_id() {
        let json = br#"[ { "site_id": "a" }, { "site_id": "  " } ]"#;

        let err = parse_sites(json).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_parse_rejects_duplicate_site_id() {
        let json = br#"[ { "site_id": "a" }, { "site_id": "b" }, { "site_id": "a" } ]"#;

        let err = parse_sites(json).unwrap_err();
        match err {
            CorpusError::DuplicateId(id) => assert_eq!(id, "a"),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_sites(b"{ not json").unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_parse_empty_array_is_valid_here() {
        // Zero sites is caught later, when the text index is built.
        let sites = parse_sites(b"[]").unwrap();
        assert!(sites.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let err = load_sites(Path::new("/nonexistent/sites.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sites.json"));
    }
}
