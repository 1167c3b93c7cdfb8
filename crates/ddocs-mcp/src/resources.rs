//! Read-only JSON resources

use crate::protocol::{JsonRpcError, ResourceDefinition};
use ddocs_core::schemas;
use ddocs_service::catalog;
use ddocs_service::DocumentService;
use serde::Serialize;

/// Resource URIs
pub mod uris {
    //! Wire resource URIs
    pub const TEMPLATE_STRUCTURE: &str = "template://structure";
    pub const TEMPLATE_SCHEMA: &str = "template://schema";
    pub const PROJECT_CURRENT: &str = "project://current";
    pub const DOCS_LIST: &str = "docs://list";
}

const JSON_MIME: &str = "application/json";

/// Definitions returned by `resources/list`
#[must_use]
pub fn definitions() -> Vec<ResourceDefinition> {
    [
        (
            uris::TEMPLATE_STRUCTURE,
            "Template Structure",
            "テンプレートの構造情報（どのセクションがあるか、必須項目は何か）",
        ),
        (
            uris::TEMPLATE_SCHEMA,
            "Document Schemas",
            "各ドキュメントの検証スキーマ",
        ),
        (
            uris::PROJECT_CURRENT,
            "Current Project",
            "現在のプロジェクト情報",
        ),
        (
            uris::DOCS_LIST,
            "Document List",
            "プロジェクト内の既存ドキュメント一覧",
        ),
    ]
    .into_iter()
    .map(|(uri, name, description)| ResourceDefinition {
        uri: uri.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mime_type: JSON_MIME.to_string(),
    })
    .collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsonRpcError> {
    serde_json::to_string_pretty(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

/// Render a resource as JSON text
///
/// # Errors
/// - `JsonRpcError::invalid_params` for an unknown URI
/// - `JsonRpcError::internal_error` if a project scan fails
pub async fn read_resource(service: &DocumentService, uri: &str) -> Result<String, JsonRpcError> {
    match uri {
        uris::TEMPLATE_STRUCTURE => to_json(&catalog::flatten()),
        uris::TEMPLATE_SCHEMA => to_json(schemas()),
        uris::PROJECT_CURRENT => {
            let info = service
                .project_info()
                .await
                .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
            to_json(&info)
        }
        uris::DOCS_LIST => {
            let docs = service
                .list_documents()
                .await
                .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
            to_json(&docs)
        }
        _ => Err(JsonRpcError::invalid_params(format!("Unknown resource: {uri}"))),
    }
}

/// MIME type of every resource
#[inline]
#[must_use]
pub fn mime_type() -> &'static str {
    JSON_MIME
}
