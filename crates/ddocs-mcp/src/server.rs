//! Line-delimited JSON-RPC server
//!
//! One request per input line, one response per output line. Notifications
//! are handled but never answered. Requests are processed in arrival order.

use crate::protocol::{
    methods, ContentBlock, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    PromptGetParams, PromptMessage, RequestId, ResourceContents, ResourceReadParams, ServerInfo,
    ToolsCallParams, ToolsCallResult, JSONRPC_VERSION, MCP_PROTOCOL_VERSION,
};
use crate::{resources, tools};
use ddocs_service::prompts::{prompts, render_prompt};
use ddocs_service::{DocumentService, ServiceConfig, ServiceError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name reported on `initialize`
    pub server_name: String,
    /// Version reported on `initialize`
    pub server_version: String,
    /// Document service settings
    pub service: ServiceConfig,
}

impl ServerConfig {
    /// Create configuration around service settings
    #[must_use]
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            server_name: "design-docs-mcp".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            service,
        }
    }

    /// With server name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

/// JSON-RPC server over a [`DocumentService`]
#[derive(Debug)]
pub struct McpServer {
    config: ServerConfig,
    service: DocumentService,
}

impl McpServer {
    /// Create server with a filesystem-backed service
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let service = DocumentService::new(config.service.clone());
        Self { config, service }
    }

    /// Create server over an existing service
    #[must_use]
    pub fn with_service(config: ServerConfig, service: DocumentService) -> Self {
        Self { config, service }
    }

    /// Underlying service
    #[inline]
    #[must_use]
    pub fn service(&self) -> &DocumentService {
        &self.service
    }

    /// Serve until `reader` reaches end of input
    ///
    /// A line that is not UTF-8 gets a parse error response; the session
    /// continues.
    ///
    /// # Errors
    /// IO errors on either stream.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            root = %self.service.root().display(),
            "design docs server starting"
        );

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    debug!(bytes = line.len(), "received message");
                    self.handle_message(line).await
                }
                Err(e) => {
                    warn!(error = %e, "message is not valid UTF-8");
                    encode(&JsonRpcResponse::error(
                        None,
                        JsonRpcError::parse_error(format!("Parse error: {e}")),
                    ))
                }
            };

            if let Some(response) = response {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("input closed, shutting down");
        Ok(())
    }

    /// Handle one raw message line, returning the serialized response if any
    pub async fn handle_message(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => Some(JsonRpcResponse::error(
                None,
                JsonRpcError::parse_error(format!("Parse error: {e}")),
            )),
            Ok(value) => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
                match serde_json::from_value::<JsonRpcRequest>(value) {
                    Ok(request) => self.handle_request(request).await,
                    Err(e) => Some(JsonRpcResponse::error(
                        id,
                        JsonRpcError::invalid_request(format!("Invalid request: {e}")),
                    )),
                }
            }
        }?;

        encode(&response)
    }

    /// Handle a parsed request; `None` for notifications
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request(format!(
                    "Invalid JSON-RPC version: {}",
                    request.jsonrpc
                )),
            ));
        }

        debug!(method = %request.method, "dispatching");
        let is_notification = request.is_notification();
        let outcome = self.dispatch(&request.method, request.params).await;

        if is_notification {
            if let Err(err) = outcome {
                debug!(method = %request.method, error = %err.message, "notification failed");
            }
            return None;
        }

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(err) => {
                warn!(method = %request.method, code = err.code, error = %err.message, "request failed");
                JsonRpcResponse::error(request.id, err)
            }
        })
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, JsonRpcError> {
        match method {
            methods::INITIALIZE => self.initialize(),
            methods::INITIALIZED | methods::PING => Ok(json!({})),
            methods::TOOLS_LIST => Ok(json!({ "tools": tools::definitions() })),
            methods::TOOLS_CALL => self.tools_call(params).await,
            methods::RESOURCES_LIST => Ok(json!({ "resources": resources::definitions() })),
            methods::RESOURCES_READ => self.resources_read(params).await,
            methods::PROMPTS_LIST => Ok(json!({ "prompts": prompts() })),
            methods::PROMPTS_GET => Self::prompts_get(params),
            _ => Err(JsonRpcError::method_not_found(method)),
        }
    }

    fn initialize(&self) -> Result<Value, JsonRpcError> {
        info!(
            name = %self.config.server_name,
            version = %self.config.server_version,
            "initialize"
        );
        to_value(&InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: json!({
                "tools": { "listChanged": false },
                "resources": { "subscribe": false, "listChanged": false },
                "prompts": { "listChanged": false },
            }),
            server_info: ServerInfo {
                name: self.config.server_name.clone(),
                version: self.config.server_version.clone(),
            },
        })
    }

    async fn tools_call(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: ToolsCallParams = parse_params(params)?;
        info!(tool = %params.name, "tool call");

        let output = tools::call_tool(&self.service, &params.name, params.arguments).await?;
        let text = serde_json::to_string_pretty(&output.value)
            .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;

        to_value(&ToolsCallResult {
            content: vec![ContentBlock::text(text)],
            is_error: output.is_error,
        })
    }

    async fn resources_read(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: ResourceReadParams = parse_params(params)?;
        let text = resources::read_resource(&self.service, &params.uri).await?;
        Ok(json!({
            "contents": [ResourceContents {
                uri: params.uri,
                mime_type: resources::mime_type().to_string(),
                text,
            }]
        }))
    }

    fn prompts_get(params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: PromptGetParams = parse_params(params)?;
        let arguments: HashMap<String, String> = params.arguments.unwrap_or_default();
        let text = render_prompt(&params.name, &arguments).map_err(|e| match e {
            ServiceError::UnknownPrompt(_) => JsonRpcError::invalid_params(e.to_string()),
            other => JsonRpcError::internal_error(other.to_string()),
        })?;

        Ok(json!({
            "messages": [PromptMessage {
                role: "user".to_string(),
                content: ContentBlock::text(text),
            }]
        }))
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;
    serde_json::from_value(params).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

fn encode(response: &JsonRpcResponse) -> Option<String> {
    match serde_json::to_string(response) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "failed to serialize response");
            None
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
