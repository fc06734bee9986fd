//! Docs root resolution and data loading
//!
//! The docs root holds the mirrored documentation tree:
//!
//! ```text
//! <root>/paths_manifest.json    path catalog
//! <root>/docs/*.md              mirrored documents
//! <root>/docs/.search_index.json   prebuilt content index
//! ```
//!
//! Resolution order: explicit `--root` flag, then the `PLUGDOCS_PATH`
//! environment variable, then `~/.plugdocs`. Loaded data is memoized for
//! the process lifetime; the backing files are treated as immutable.

use std::cell::OnceCell;
use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use walkdir::WalkDir;

use crate::catalog::{category_label, Manifest, MANIFEST_FILE};
use crate::error::{DocsError, Result};
use crate::index::{SearchIndex, SEARCH_INDEX_FILE};

/// Environment variable overriding the docs root
pub const DOCS_PATH_ENV_VAR: &str = "PLUGDOCS_PATH";
/// Home-relative default docs root
pub const DEFAULT_DOCS_DIR: &str = ".plugdocs";
/// Subdirectory holding the mirrored markdown files
pub const DOCS_SUBDIR: &str = "docs";

/// Resolved docs root with memoized manifest/index access
#[derive(Debug)]
pub struct DocsRoot {
    root: PathBuf,
    manifest: OnceCell<Manifest>,
    search_index: OnceCell<Option<SearchIndex>>,
}

impl DocsRoot {
    /// Resolve the docs root from an optional CLI override
    pub fn resolve(override_root: Option<&Path>) -> Self {
        let root = override_root
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(DOCS_PATH_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(DEFAULT_DOCS_DIR)
            });

        tracing::debug!(root = %root.display(), "resolve_docs_root");

        Self {
            root,
            manifest: OnceCell::new(),
            search_index: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Error unless the docs root directory exists
    pub fn require_exists(&self) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(DocsError::RootNotFound {
                path: self.root.clone(),
            })
        }
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(DOCS_SUBDIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.docs_dir().join(SEARCH_INDEX_FILE)
    }

    /// Load the manifest, memoized for the process lifetime
    pub fn manifest(&self) -> Result<&Manifest> {
        if let Some(manifest) = self.manifest.get() {
            return Ok(manifest);
        }

        let manifest = Manifest::load(&self.manifest_path())?;
        Ok(self.manifest.get_or_init(|| manifest))
    }

    /// Load the search index, memoized. `None` means not available.
    pub fn search_index(&self) -> Option<&SearchIndex> {
        self.search_index
            .get_or_init(|| SearchIndex::load(&self.index_path()))
            .as_ref()
    }

    /// Load the search index or error with "index not available"
    pub fn require_search_index(&self) -> Result<&SearchIndex> {
        self.search_index().ok_or_else(|| DocsError::IndexNotAvailable {
            path: self.index_path(),
        })
    }

    /// Sorted topic stems of the markdown files under `docs/`
    pub fn topics(&self) -> Result<Vec<String>> {
        let docs_dir = self.docs_dir();
        if !docs_dir.exists() {
            return Err(DocsError::DocsDirNotFound { path: docs_dir });
        }

        let mut topics: Vec<String> = WalkDir::new(&docs_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();

        topics.sort();
        Ok(topics)
    }

    /// Number of markdown files under `docs/` (0 when missing)
    pub fn doc_count(&self) -> usize {
        self.topics().map(|topics| topics.len()).unwrap_or(0)
    }

    /// Gather an installation status snapshot
    pub fn status(&self) -> Result<StatusReport> {
        let installed = self.exists();

        if !installed {
            return Ok(StatusReport {
                location: self.root.display().to_string(),
                installed: false,
                doc_count: 0,
                manifest_paths: 0,
                last_updated: None,
                categories: Vec::new(),
                indexed_files: None,
            });
        }

        let manifest = self.manifest()?;
        let categories = manifest
            .categories
            .iter()
            .map(|(name, paths)| CategoryCount {
                name: name.clone(),
                label: category_label(name),
                count: paths.len(),
            })
            .collect();

        Ok(StatusReport {
            location: self.root.display().to_string(),
            installed: true,
            doc_count: self.doc_count(),
            manifest_paths: manifest.metadata.total_paths,
            last_updated: manifest.metadata.last_updated,
            categories,
            indexed_files: self.search_index().map(|index| index.indexed_files),
        })
    }
}

/// Installation status snapshot
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub location: String,
    pub installed: bool,
    pub doc_count: usize,
    pub manifest_paths: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryCount>,
    /// `None` when the search index has not been built
    pub indexed_files: Option<usize>,
}

/// Per-category path count for status output
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub label: String,
    pub count: usize,
}
