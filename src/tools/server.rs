//! Line-delimited JSON-RPC 2.0 over stdin/stdout.

use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::{tool_schemas, ToolDispatcher};
use crate::error::{ServerError, ServerResult};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "project-metrics";

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

pub struct McpServer {
    dispatcher: ToolDispatcher,
}

impl McpServer {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Serves requests one at a time until the reader is exhausted.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> ServerResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!("received: {}", line);

            if let Some(response) = self.handle_message(&line) {
                let mut frame = serde_json::to_string(&response)?;
                debug!("sending: {}", frame);
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("input closed, stopping server");
        Ok(())
    }

    /// Handles one frame. Notifications (no `id` key) get no response; an
    /// explicit `"id": null` is still a request.
    pub fn handle_message(&self, message: &str) -> Option<Value> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(raw) => raw,
            Err(err) => return Some(error_response(Value::Null, &ServerError::Parse(err))),
        };
        let has_id = raw.get("id").is_some();

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(err) => {
                let err = ServerError::InvalidRequest(err.to_string());
                return Some(error_response(Value::Null, &err));
            }
        };

        if !has_id {
            debug!("notification: {}", request.method);
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        match self.handle_request(&request.method, request.params.as_ref()) {
            Ok(result) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result
            })),
            Err(err) => {
                warn!("request {} failed: {}", request.method, err);
                Some(error_response(id, &err))
            }
        }
    }

    fn handle_request(&self, method: &str, params: Option<&Value>) -> ServerResult<Value> {
        match method {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_schemas() })),
            "tools/call" => self.handle_call_tool(params),
            "shutdown" => {
                info!("shutdown requested");
                Ok(Value::Null)
            }
            other => Err(ServerError::MethodNotFound(other.to_string())),
        }
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn handle_call_tool(&self, params: Option<&Value>) -> ServerResult<Value> {
        let params = params
            .ok_or_else(|| ServerError::InvalidParams("missing params for tools/call".to_string()))?;

        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ServerError::InvalidParams("missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let response = self.dispatcher.dispatch(name, &arguments);

        Ok(json!({
            "content": [{
                "type": "text",
                "text": response.text
            }]
        }))
    }
}

fn error_response(id: Value, err: &ServerError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": err.code(),
            "message": err.to_string()
        }
    })
}

/// Serves the project at `project_root` over the process's stdin and stdout.
pub async fn run_server(project_root: PathBuf) -> anyhow::Result<()> {
    info!("serving metrics for {}", project_root.display());

    let server = McpServer::new(ToolDispatcher::new(project_root));
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    server.run(stdin, stdout).await?;
    Ok(())
}
