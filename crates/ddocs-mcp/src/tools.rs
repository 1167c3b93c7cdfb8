//! Tool catalog and dispatch
//!
//! Every tool answers with one JSON record. Service failures are ordinary
//! results (`success: false`); only malformed arguments are protocol errors.

use crate::protocol::{JsonRpcError, ToolDefinition};
use ddocs_service::response::respond;
use ddocs_service::{DocumentService, MetadataArgs};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

/// Tool names
pub mod names {
    //! Wire tool names
    pub const LIST_TEMPLATES: &str = "list_templates";
    pub const CREATE_DOCUMENT: &str = "create_document";
    pub const GET_SECTION: &str = "get_section";
    pub const UPDATE_SECTION: &str = "update_section";
    pub const VALIDATE_DOCUMENT: &str = "validate_document";
    pub const FILL_METADATA: &str = "fill_metadata";
    pub const LIST_SECTIONS: &str = "list_sections";
}

/// Result of one tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Record returned as the text content
    pub value: Value,
    /// Set only when the tool itself was not recognised
    pub is_error: bool,
}

impl ToolOutput {
    fn ok(value: Value) -> Self {
        Self {
            value,
            is_error: false,
        }
    }
}

fn document_path_property(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

/// Definitions returned by `tools/list`
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    let tool = |name: &str, description: &str, input_schema: Value| ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    };

    vec![
        tool(
            names::LIST_TEMPLATES,
            "利用可能なテンプレート一覧を取得",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "フィルタするカテゴリ（product, architecture, dev_process, agent, ops）",
                    }
                },
            }),
        ),
        tool(
            names::CREATE_DOCUMENT,
            "テンプレートから新規ドキュメントを作成",
            json!({
                "type": "object",
                "properties": {
                    "template_type": {
                        "type": "string",
                        "description": "テンプレートタイプ（vision.md, requirements.yaml, roles.yaml など）",
                    },
                    "output_path": {
                        "type": "string",
                        "description": "出力先パス（プロジェクトルートからの相対パス）",
                    },
                    "metadata": {
                        "type": "object",
                        "description": "自動入力するメタデータ",
                        "properties": {
                            "author": { "type": "string" },
                            "date": { "type": "string" },
                        },
                    },
                },
                "required": ["template_type", "output_path"],
            }),
        ),
        tool(
            names::GET_SECTION,
            "ドキュメントの特定セクションの内容を取得",
            json!({
                "type": "object",
                "properties": {
                    "document_path": document_path_property("ドキュメントのパス"),
                    "section_name": {
                        "type": "string",
                        "description": "セクション名（markdownの場合はヘッダー名）",
                    },
                },
                "required": ["document_path", "section_name"],
            }),
        ),
        tool(
            names::UPDATE_SECTION,
            "ドキュメントの特定セクションを更新（マーカーベース）",
            json!({
                "type": "object",
                "properties": {
                    "document_path": document_path_property("ドキュメントのパス"),
                    "section_name": {
                        "type": "string",
                        "description": "セクション名（AI_EDITABLE マーカー名）",
                    },
                    "new_content": {
                        "type": "string",
                        "description": "新しいセクション内容",
                    },
                },
                "required": ["document_path", "section_name", "new_content"],
            }),
        ),
        tool(
            names::VALIDATE_DOCUMENT,
            "ドキュメントが規定の構造に従っているか検証",
            json!({
                "type": "object",
                "properties": {
                    "document_path": document_path_property("検証するドキュメントのパス"),
                },
                "required": ["document_path"],
            }),
        ),
        tool(
            names::FILL_METADATA,
            "プロジェクト情報からメタデータを自動入力",
            json!({
                "type": "object",
                "properties": {
                    "document_path": document_path_property("メタデータを入力するドキュメントのパス"),
                    "metadata": {
                        "type": "object",
                        "description": "入力するメタデータ",
                        "properties": {
                            "date": { "type": "string" },
                            "author": { "type": "string" },
                            "version": { "type": "string" },
                        },
                    },
                },
                "required": ["document_path"],
            }),
        ),
        tool(
            names::LIST_SECTIONS,
            "ドキュメントの見出しと編集可能セクションの一覧を取得",
            json!({
                "type": "object",
                "properties": {
                    "document_path": document_path_property("ドキュメントのパス"),
                },
                "required": ["document_path"],
            }),
        ),
    ]
}

#[derive(Debug, Default, Deserialize)]
struct ListTemplatesArgs {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateDocumentArgs {
    template_type: String,
    output_path: String,
    #[serde(default)]
    metadata: MetadataArgs,
}

#[derive(Debug, Deserialize)]
struct DocumentArgs {
    document_path: String,
}

#[derive(Debug, Deserialize)]
struct SectionArgs {
    document_path: String,
    section_name: String,
}

#[derive(Debug, Deserialize)]
struct UpdateSectionArgs {
    document_path: String,
    section_name: String,
    new_content: String,
}

#[derive(Debug, Deserialize)]
struct FillMetadataArgs {
    document_path: String,
    #[serde(default)]
    metadata: MetadataArgs,
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, JsonRpcError> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments for {tool}: {e}")))
}

/// Run a tool against the service
///
/// # Errors
/// `JsonRpcError::invalid_params` if the arguments do not match the tool's
/// input schema.
pub async fn call_tool(
    service: &DocumentService,
    name: &str,
    arguments: Value,
) -> Result<ToolOutput, JsonRpcError> {
    let value = match name {
        names::LIST_TEMPLATES => {
            let args: ListTemplatesArgs = parse_args(name, arguments)?;
            json!(service.list_templates(args.category.as_deref()))
        }
        names::CREATE_DOCUMENT => {
            let args: CreateDocumentArgs = parse_args(name, arguments)?;
            respond(
                &service
                    .create_document(&args.template_type, &args.output_path, args.metadata)
                    .await,
            )
        }
        names::GET_SECTION => {
            let args: SectionArgs = parse_args(name, arguments)?;
            respond(&service.get_section(&args.document_path, &args.section_name).await)
        }
        names::UPDATE_SECTION => {
            let args: UpdateSectionArgs = parse_args(name, arguments)?;
            respond(
                &service
                    .update_section(&args.document_path, &args.section_name, &args.new_content)
                    .await,
            )
        }
        names::VALIDATE_DOCUMENT => {
            let args: DocumentArgs = parse_args(name, arguments)?;
            respond(&service.validate_document(&args.document_path).await)
        }
        names::FILL_METADATA => {
            let args: FillMetadataArgs = parse_args(name, arguments)?;
            respond(&service.fill_metadata(&args.document_path, args.metadata).await)
        }
        names::LIST_SECTIONS => {
            let args: DocumentArgs = parse_args(name, arguments)?;
            respond(&service.list_sections(&args.document_path).await)
        }
        _ => {
            tracing::warn!(tool = name, "unknown tool");
            return Ok(ToolOutput {
                value: json!({ "error": format!("Unknown tool: {name}") }),
                is_error: true,
            });
        }
    };

    if value.get("success") == Some(&Value::Bool(false)) {
        tracing::warn!(tool = name, error = %value["error"], "tool call failed");
    }
    Ok(ToolOutput::ok(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_tools_with_object_schemas() {
        let defs = definitions();
        let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "list_templates",
                "create_document",
                "get_section",
                "update_section",
                "validate_document",
                "fill_metadata",
                "list_sections"
            ]
        );
        assert!(defs.iter().all(|d| d.input_schema["type"] == "object"));
    }

    #[test]
    fn missing_argument_is_invalid_params() {
        let err = parse_args::<SectionArgs>("get_section", json!({ "document_path": "a.md" }))
            .unwrap_err();
        assert_eq!(err.code, -32602);
        assert!(err.message.contains("section_name"));
    }

    #[test]
    fn null_arguments_are_empty_object() {
        let args: ListTemplatesArgs = parse_args("list_templates", Value::Null).unwrap();
        assert!(args.category.is_none());
    }
}
