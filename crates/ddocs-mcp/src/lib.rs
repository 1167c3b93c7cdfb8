//! ddocs MCP server
//!
//! Exposes the document service as tools, resources and prompts over
//! line-delimited JSON-RPC 2.0 on stdio.
//!
//! # Methods
//!
//! - `initialize`, `notifications/initialized`, `ping`
//! - `tools/list`, `tools/call`
//! - `resources/list`, `resources/read`
//! - `prompts/list`, `prompts/get`

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use server::{McpServer, ServerConfig};
