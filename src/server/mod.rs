//! MCP Server implementation
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Logging goes to stderr so the
//! protocol channel on stdout stays clean.

mod handlers;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// A response line written back to the client
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Reply {
    Success(JsonRpcResponse),
    Error(JsonRpcError),
}

/// MCP Server that handles JSON-RPC communication
pub struct McpServer {
    server_info: ServerInfo,
    tools: HashMap<String, Box<dyn Tool>>,
}

impl McpServer {
    /// Create a new MCP server with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a new MCP server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self {
            server_info: info,
            tools: HashMap::new(),
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    /// Get the number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve stdin/stdout until EOF (blocking)
    pub fn run(&self) -> McpResult<()> {
        info!(
            server = %self.server_info.name,
            tools = self.tool_count(),
            "MCP server listening on stdio"
        );
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve requests from any line reader, writing replies to `writer`
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> McpResult<()> {
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(reply) = self.handle_request(trimmed) {
                    writeln!(writer, "{}", serde_json::to_string(&reply)?)?;
                    writer.flush()?;
                }
            }
            line.clear();
        }
        info!("MCP client closed the connection");
        Ok(())
    }

    /// Handle a single JSON-RPC request line
    ///
    /// Returns `None` for notifications, which get no reply.
    pub fn handle_request(&self, request_str: &str) -> Option<Reply> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "Unparseable request");
                return Some(Reply::Error(JsonRpcError::parse_error(e.to_string())));
            }
        };

        if !request.is_valid() {
            return Some(Reply::Error(JsonRpcError::invalid_request(
                request.id.unwrap_or(Value::Null),
                "jsonrpc must be '2.0'",
            )));
        }

        debug!(method = %request.method, "Request");

        if request.is_notification() {
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let reply = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => Reply::Success(JsonRpcResponse::new(id, json!({}))),
            _ => Reply::Error(JsonRpcError::method_not_found(id, &request.method)),
        };
        Some(reply)
    }

    fn handle_initialize(&self, id: Value) -> Reply {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": self.server_info
        });
        Reply::Success(JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&self, id: Value) -> Reply {
        let mut tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Reply::Success(JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&self, id: Value, params: Option<Value>) -> Reply {
        let Some(params) = params else {
            return Reply::Error(JsonRpcError::invalid_params(id, "Missing parameters"));
        };
        let Some(tool_name) = extract_tool_name(&params) else {
            return Reply::Error(JsonRpcError::invalid_params(id, "Missing tool name"));
        };
        let Some(tool) = self.tools.get(tool_name) else {
            return Reply::Error(JsonRpcError::unknown_tool(id, tool_name));
        };

        debug!(tool = tool_name, "Calling tool");
        match tool.execute(extract_arguments(&params)) {
            Ok(result) => Reply::Success(JsonRpcResponse::new(id, result)),
            Err(e) => {
                warn!(tool = tool_name, error = %e, "Tool execution failed");
                Reply::Error(JsonRpcError::tool_failed(id, e.to_string()))
            }
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}
