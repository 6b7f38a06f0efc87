//! Axum route handlers for the probe endpoints
//!
//! Each route forwards a fixed prompt (and, for the tool-call routes, a
//! fixed tool definition) to one backend surface and relays the raw JSON.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, routing};

use crate::dispatch::ToolCallDispatcher;
use crate::error::DispatchError;
use crate::target::BackendTarget;
use crate::types::ToolSpec;

/// Prompt sent by the plain-chat route
const PLAIN_CHAT_PROMPT: &str = "Make some robot noises";

/// Prompt sent by the tool-call routes
const TOOL_CALL_PROMPT: &str = "Hype up the user HichaelMart";

/// The fixed tool every tool-call route advertises
fn hype_up_tool() -> ToolSpec {
    ToolSpec {
        name: "hypeUp".to_owned(),
        description: "Hypes up the user".to_owned(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "userName": {
                    "type": "string",
                    "description": "The user name that will be hyped up",
                },
            },
            "required": ["userName"],
        }),
    }
}

/// Build the probe router with all endpoints
pub fn probe_router(dispatcher: Arc<ToolCallDispatcher>) -> Router {
    Router::new()
        .route("/", routing::get(index))
        .route("/chat-completions", routing::get(chat_completions))
        .route("/our-tool-calls", routing::get(our_tool_calls))
        .route("/their-tool-calls", routing::get(their_tool_calls))
        .route("/compat-tool-calls", routing::get(compat_tool_calls))
        .with_state(dispatcher)
}

/// Handle `GET /` — landing page listing the probe routes
async fn index() -> Html<&'static str> {
    Html(
        r#"<h1>toolprobe</h1>
<h2>API calls</h2>
<ul>
    <li><a href="/chat-completions" target="chat">Plain Chat Completions</a></li>
    <li><a href="/our-tool-calls" target="ours">Gateway Native Tool Calls</a></li>
    <li><a href="/their-tool-calls" target="theirs">Direct Provider Tool Calls</a></li>
    <li><a href="/compat-tool-calls" target="compat">Gateway Compat Tool Calls</a></li>
</ul>

<h2>Resources</h2>
<ul>
    <li><a href="https://platform.openai.com/docs/api-reference/chat/create#chat-create-tools">Tool calling API docs</a></li>
</ul>
"#,
    )
}

/// Handle `GET /chat-completions` — gateway compat surface, no tools
async fn chat_completions(State(dispatcher): State<Arc<ToolCallDispatcher>>) -> Response {
    let model = dispatcher.plain_chat_model().to_owned();
    let result = dispatcher
        .dispatch_with_model(BackendTarget::GatewayCompat, &model, PLAIN_CHAT_PROMPT, &[])
        .await;
    relay(result)
}

/// Handle `GET /our-tool-calls` — native primitive, flat tool shape
async fn our_tool_calls(State(dispatcher): State<Arc<ToolCallDispatcher>>) -> Response {
    let result = dispatcher
        .dispatch(BackendTarget::GatewayNative, TOOL_CALL_PROMPT, &[hype_up_tool()])
        .await;
    relay(result)
}

/// Handle `GET /their-tool-calls` — direct provider, wrapped tool shape
async fn their_tool_calls(State(dispatcher): State<Arc<ToolCallDispatcher>>) -> Response {
    let result = dispatcher
        .dispatch(BackendTarget::DirectProvider, TOOL_CALL_PROMPT, &[hype_up_tool()])
        .await;
    relay(result)
}

/// Handle `GET /compat-tool-calls` — gateway compat surface, wrapped tool shape
async fn compat_tool_calls(State(dispatcher): State<Arc<ToolCallDispatcher>>) -> Response {
    let result = dispatcher
        .dispatch(BackendTarget::GatewayCompat, TOOL_CALL_PROMPT, &[hype_up_tool()])
        .await;
    relay(result)
}

/// Relay a dispatch result: the raw backend JSON on success, an error
/// envelope with the mapped status otherwise
fn relay(result: Result<serde_json::Value, DispatchError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(error) => {
            let status = error.status_code();
            let body = serde_json::json!({
                "error": {
                    "message": error.to_string(),
                    "type": error.error_type(),
                }
            });
            (status, Json(body)).into_response()
        }
    }
}
