//! stdio transport for MCP JSON-RPC

use crate::UnrealMcpServer;
use crate::editor::EditorBridge;
use crate::error::Result;
use crate::mcp::{
    InitializeParams, InitializeResult, ListChanged, PROTOCOL_VERSION, Request, Response,
    ResourcesCapability, ServerCapabilities, error_codes,
};
use crate::prompts::{get_prompt, list_prompts};
use crate::tools::{handle_tool_call, list_tools};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

const BRIDGE_RESOURCE_URI: &str = "unreal://bridge";

const INSTRUCTIONS: &str = "Drive a running Unreal editor. Each tool forwards one command to the \
editor plugin and returns {ok, payload, error_text}. Read the unreal_best_practices prompt first.";

/// Run the MCP server on stdio
pub async fn run<B: EditorBridge>(server: UnrealMcpServer<B>) -> Result<()> {
    info!("Unreal MCP server starting on stdio");
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve(&server, reader, writer).await
}

/// Serve newline-delimited JSON-RPC until the reader hits EOF
pub async fn serve<B, R, W>(server: &UnrealMcpServer<B>, mut reader: R, mut writer: W) -> Result<()>
where
    B: EditorBridge,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // EOF - client disconnected
            info!("Client disconnected (EOF)");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Received: {}", trimmed);

        let response = match serde_json::from_str::<Request>(trimmed) {
            Ok(request) => {
                if request.is_notification() {
                    debug!("Notification {}", request.method);
                    continue;
                }
                handle_request(&request, server).await
            }
            Err(e) => {
                error!("Failed to parse request: {}", e);
                Response::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                )
            }
        };

        let response_json = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_json);

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

async fn handle_request<B: EditorBridge>(request: &Request, server: &UnrealMcpServer<B>) -> Response {
    match request.method.as_str() {
        "initialize" => handle_initialize(request, server),
        "ping" => Response::success(request.id.clone(), serde_json::json!({})),
        "tools/list" => handle_tools_list(request),
        "tools/call" => handle_tools_call(request, server).await,
        "prompts/list" => handle_prompts_list(request),
        "prompts/get" => handle_prompts_get(request),
        "resources/list" => handle_resources_list(request),
        "resources/read" => handle_resources_read(request, server),
        _ => Response::error(
            request.id.clone(),
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

fn handle_initialize<B: EditorBridge>(request: &Request, server: &UnrealMcpServer<B>) -> Response {
    let params: InitializeParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                request.id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Invalid initialize params: {}", e),
            );
        }
    };

    info!(
        "Client {} {} connected (protocol {})",
        params.client_info.name, params.client_info.version, params.protocol_version
    );

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: ListChanged {
                list_changed: false,
            },
            prompts: ListChanged {
                list_changed: false,
            },
            resources: ResourcesCapability {
                subscribe: false,
                list_changed: false,
            },
        },
        server_info: server.info().clone(),
        instructions: Some(INSTRUCTIONS.to_string()),
    };

    match serde_json::to_value(result) {
        Ok(value) => Response::success(request.id.clone(), value),
        Err(e) => Response::error(
            request.id.clone(),
            error_codes::INTERNAL_ERROR,
            format!("Failed to encode initialize result: {}", e),
        ),
    }
}

fn handle_tools_list(request: &Request) -> Response {
    let tools = list_tools();
    Response::success(request.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call<B: EditorBridge>(
    request: &Request,
    server: &UnrealMcpServer<B>,
) -> Response {
    #[derive(serde::Deserialize)]
    struct ToolCallParams {
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    }

    let params: ToolCallParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                request.id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Invalid tool call params: {}", e),
            );
        }
    };

    handle_tool_call(
        &params.name,
        params.arguments,
        request.id.clone(),
        server.bridge(),
    )
    .await
}

fn handle_prompts_list(request: &Request) -> Response {
    Response::success(
        request.id.clone(),
        serde_json::json!({ "prompts": list_prompts() }),
    )
}

fn handle_prompts_get(request: &Request) -> Response {
    #[derive(serde::Deserialize)]
    struct GetParams {
        name: String,
    }

    let params: GetParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                request.id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Invalid prompt params: {}", e),
            );
        }
    };

    match get_prompt(&params.name) {
        Some(prompt) => Response::success(request.id.clone(), prompt),
        None => Response::error(
            request.id.clone(),
            error_codes::INVALID_PARAMS,
            format!("Unknown prompt: {}", params.name),
        ),
    }
}

fn handle_resources_list(request: &Request) -> Response {
    let resources = vec![serde_json::json!({
        "uri": BRIDGE_RESOURCE_URI,
        "name": "Editor Bridge",
        "description": "Address and framing of the editor connection",
        "mimeType": "application/json"
    })];

    Response::success(
        request.id.clone(),
        serde_json::json!({ "resources": resources }),
    )
}

fn handle_resources_read<B: EditorBridge>(
    request: &Request,
    server: &UnrealMcpServer<B>,
) -> Response {
    #[derive(serde::Deserialize)]
    struct ReadParams {
        uri: String,
    }

    let params: ReadParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                request.id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Invalid read params: {}", e),
            );
        }
    };

    if params.uri != BRIDGE_RESOURCE_URI {
        warn!("Unknown resource requested: {}", params.uri);
        return Response::error(
            request.id.clone(),
            error_codes::INVALID_PARAMS,
            format!("Unknown resource: {}", params.uri),
        );
    }

    Response::success(
        request.id.clone(),
        serde_json::json!({
            "contents": [{
                "uri": params.uri,
                "mimeType": "application/json",
                "text": server.bridge().describe().to_string()
            }]
        }),
    )
}
