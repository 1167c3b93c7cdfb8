//! ddocs Service
//!
//! File-backed orchestration of the `ddocs_core` operations for one
//! project root.
//!
//! # Components
//!
//! - [`DocumentService`]: resolve, read, delegate, write
//! - [`catalog`]: expected document taxonomy and creatable templates
//! - [`project`]: project summary and document listing
//! - [`prompts`]: review workflow prompts
//! - [`response`]: outward success / failure records
//!
//! # Example
//!
//! ```rust,no_run
//! use ddocs_service::{DocumentService, ServiceConfig};
//!
//! # async fn run() -> Result<(), ddocs_service::ServiceError> {
//! let service = DocumentService::new(ServiceConfig::new("/path/to/project"));
//! let result = service.validate_document("docs/agent/roles.yaml").await?;
//! println!("valid: {}", result.is_valid());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod locks;
pub mod paths;
pub mod project;
pub mod prompts;
pub mod response;
pub mod service;
pub mod store;

pub use config::{ServiceConfig, PROJECT_PATH_ENV};
pub use error::{ServiceError, ServiceResult};
pub use project::{DocumentEntry, ProjectInfo};
pub use service::{DocumentService, MetadataArgs};
pub use store::{DocumentStore, FsStore, MemoryStore};
