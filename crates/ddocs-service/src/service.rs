//! Document Service - main entry point
//!
//! Resolves project-relative paths, reads and writes whole documents
//! through a [`DocumentStore`], and delegates to the pure operations in
//! `ddocs_core`. Read-modify-write operations on one path are serialized.

use crate::catalog::{self, TemplateEntry};
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::locks::PathLocks;
use crate::paths;
use crate::project::{self, DocumentEntry, ProjectInfo};
use crate::response::{CreatedRecord, MessageRecord, SectionRecord};
use crate::store::{DocumentStore, FsStore};
use ddocs_core::metadata::{fill_metadata, MetadataFill};
use ddocs_core::section::{locate_header_section, outline, update_marker_section, Outline};
use ddocs_core::validate::{validate, ValidationResult};
use ddocs_core::{document_name, DocumentKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Caller-supplied metadata values
///
/// Every field is optional; a missing date becomes today's local date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataArgs {
    /// `YYYY-MM-DD`; today when absent
    #[serde(default)]
    pub date: Option<String>,
    /// Author name
    #[serde(default)]
    pub author: Option<String>,
    /// Document version
    #[serde(default)]
    pub version: Option<String>,
}

impl MetadataArgs {
    /// Resolve into a fill, defaulting the date to today
    #[must_use]
    pub fn into_fill(self) -> MetadataFill {
        MetadataFill {
            date: self.date.unwrap_or_else(today),
            author: self.author,
            version: self.version,
        }
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Document Service
///
/// Every operation addresses documents relative to the configured project
/// root. Failures are returned as [`ServiceError`] values and never leave
/// a partially written document behind.
pub struct DocumentService {
    config: ServiceConfig,
    store: Arc<dyn DocumentStore>,
    locks: PathLocks,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService")
            .field("config", &self.config)
            .field("locked_paths", &self.locks.len())
            .finish_non_exhaustive()
    }
}

impl DocumentService {
    /// Create filesystem-backed service
    #[inline]
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(FsStore))
    }

    /// Create service over a specific store
    #[must_use]
    pub fn with_store(config: ServiceConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config,
            store,
            locks: PathLocks::new(),
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Project root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        self.config.root()
    }

    /// Extract a `## Heading` section
    ///
    /// # Arguments
    /// * `document_path` - Path relative to the project root
    /// * `section_name` - Heading text, matched case-insensitively
    ///
    /// # Returns
    /// The heading line and body, or `section: None` if no heading matched
    ///
    /// # Errors
    /// - `ServiceError::InvalidPath` if the path escapes the root
    /// - `ServiceError::NotFound` if the document does not exist
    /// - `ServiceError::TooLarge` if the document exceeds the size limit
    pub async fn get_section(
        &self,
        document_path: &str,
        section_name: &str,
    ) -> ServiceResult<SectionRecord> {
        let (_, content) = self.load(document_path).await?;
        Ok(SectionRecord {
            section: locate_header_section(&content, section_name),
        })
    }

    /// Replace the interior of an `AI_EDITABLE` marker pair
    ///
    /// # Errors
    /// - `ServiceError::Section` if the marker pair is missing or unbalanced;
    ///   the document is left untouched
    /// - Any error from resolving or reading the document
    pub async fn update_section(
        &self,
        document_path: &str,
        section_name: &str,
        new_content: &str,
    ) -> ServiceResult<MessageRecord> {
        let full = paths::resolve(self.root(), document_path)?;
        let _guard = self.locks.acquire(&full).await;

        let content = self.read_resolved(document_path, &full).await?;
        let updated = update_marker_section(&content, section_name, new_content).map_err(|e| {
            tracing::warn!(
                document = document_path,
                section = section_name,
                error = %e,
                "section update rejected"
            );
            e
        })?;
        self.write_resolved(&full, &updated).await?;

        tracing::info!(document = document_path, section = section_name, "section updated");
        Ok(MessageRecord::new(format!(
            "Section '{section_name}' updated successfully"
        )))
    }

    /// Validate a document according to its kind
    ///
    /// Kind follows the extension (`.yaml`/`.yml` are structured); the
    /// file name selects the schema or expected headings.
    ///
    /// # Errors
    /// Any error from resolving or reading the document. Validation
    /// findings are part of the returned result, not errors.
    pub async fn validate_document(&self, document_path: &str) -> ServiceResult<ValidationResult> {
        let (full, content) = self.load(document_path).await?;
        let kind = DocumentKind::from_path(&full);
        Ok(validate(kind, &content, &document_name(&full)))
    }

    /// Substitute metadata placeholders in an existing document
    ///
    /// # Errors
    /// Any error from resolving, reading or writing the document.
    pub async fn fill_metadata(
        &self,
        document_path: &str,
        metadata: MetadataArgs,
    ) -> ServiceResult<MessageRecord> {
        let full = paths::resolve(self.root(), document_path)?;
        let _guard = self.locks.acquire(&full).await;

        let content = self.read_resolved(document_path, &full).await?;
        let filled = fill_metadata(&content, &metadata.into_fill());
        self.write_resolved(&full, &filled).await?;

        tracing::info!(document = document_path, "metadata filled");
        Ok(MessageRecord::new("Metadata filled successfully"))
    }

    /// Create a document from a template, overwriting any existing file
    ///
    /// Only the date and author placeholders are filled.
    ///
    /// # Errors
    /// - `ServiceError::UnknownTemplate` if no template has this type
    /// - `ServiceError::InvalidPath` if the output path escapes the root
    /// - `ServiceError::Io` if the write fails
    pub async fn create_document(
        &self,
        template_type: &str,
        output_path: &str,
        metadata: MetadataArgs,
    ) -> ServiceResult<CreatedRecord> {
        let fill = metadata.into_fill();
        let body = catalog::render_template(template_type, &fill.date, fill.author.as_deref())
            .ok_or_else(|| ServiceError::UnknownTemplate(template_type.to_string()))?;

        let full = paths::resolve(self.root(), output_path)?;
        let _guard = self.locks.acquire(&full).await;
        self.write_resolved(&full, &body).await?;

        tracing::info!(template = template_type, path = %full.display(), "document created");
        Ok(CreatedRecord {
            path: full.display().to_string(),
            template_type: template_type.to_string(),
        })
    }

    /// H2 headings and editable marker names of a document
    ///
    /// # Errors
    /// Any error from resolving or reading the document.
    pub async fn list_sections(&self, document_path: &str) -> ServiceResult<Outline> {
        let (_, content) = self.load(document_path).await?;
        Ok(outline(&content))
    }

    /// Expected documents, optionally filtered by category
    #[must_use]
    pub fn list_templates(&self, category: Option<&str>) -> Vec<TemplateEntry> {
        catalog::list_templates(category)
    }

    /// Summary of the project root
    ///
    /// # Errors
    /// `ServiceError::Io` if the blocking scan could not complete.
    pub async fn project_info(&self) -> ServiceResult<ProjectInfo> {
        let root = self.root().to_path_buf();
        let scan_root = root.clone();
        tokio::task::spawn_blocking(move || project::project_info(&scan_root))
            .await
            .map_err(|e| ServiceError::io_error(root, std::io::Error::other(e)))
    }

    /// Documents present under the scanned directories
    ///
    /// # Errors
    /// `ServiceError::Io` if the blocking scan could not complete.
    pub async fn list_documents(&self) -> ServiceResult<Vec<DocumentEntry>> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || project::list_documents(&config))
            .await
            .map_err(|e| ServiceError::io_error(self.root(), std::io::Error::other(e)))
    }

    async fn load(&self, document_path: &str) -> ServiceResult<(PathBuf, String)> {
        let full = paths::resolve(self.root(), document_path)?;
        let content = self.read_resolved(document_path, &full).await?;
        Ok((full, content))
    }

    async fn read_resolved(&self, document_path: &str, full: &Path) -> ServiceResult<String> {
        let size = self
            .store
            .file_size(full)
            .await
            .map_err(|e| ServiceError::io_error(full, e))?
            .ok_or_else(|| ServiceError::not_found(document_path))?;

        if size > self.config.max_document_bytes {
            return Err(ServiceError::TooLarge {
                path: document_path.to_string(),
                size,
                max: self.config.max_document_bytes,
            });
        }

        self.store
            .read(full)
            .await
            .map_err(|e| ServiceError::io_error(full, e))
    }

    async fn write_resolved(&self, full: &Path, content: &str) -> ServiceResult<()> {
        self.store.write(full, content).await.map_err(|e| {
            tracing::warn!(path = %full.display(), error = %e, "document write failed");
            ServiceError::io_error(full, e)
        })
    }
}
