//! `FigaroServer` — axum HTTP server over a [`TurnController`].

use std::io;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use figaro_runtime::TurnController;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::health::{self, HealthResponse};
use crate::routes;

/// Shared state accessible from axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The turn pipeline every request runs through.
    pub controller: Arc<TurnController>,
    /// When the server started.
    pub start_time: Instant,
}

/// The main figaro server.
pub struct FigaroServer {
    config: ServerConfig,
    controller: Arc<TurnController>,
    start_time: Instant,
}

impl FigaroServer {
    /// Create a new server.
    #[must_use]
    pub fn new(config: ServerConfig, controller: Arc<TurnController>) -> Self {
        Self {
            config,
            controller,
            start_time: Instant::now(),
        }
    }

    /// Build the axum router with all routes.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = AppState {
            controller: self.controller.clone(),
            start_time: self.start_time,
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/api/turn", post(routes::turn_handler))
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Get the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until `shutdown` is cancelled.
    ///
    /// In-flight requests are drained before the future resolves.
    pub async fn serve(&self, shutdown: CancellationToken) -> io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        let addr = listener.local_addr()?;
        info!(host = %self.config.host, port = addr.port(), "figaro server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let capabilities = state.controller.registry().len();
    Json(health::health_check(state.start_time, capabilities))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use figaro_capabilities::CapabilityError;
    use figaro_capabilities::registry::CapabilityRegistry;
    use figaro_capabilities::traits::{Capability, CapabilityContext};
    use figaro_core::capability::{
        CapabilityOutput, CapabilitySpec, ParameterKind, ParameterSpec,
    };
    use figaro_core::prompt::PromptContext;
    use figaro_core::selection::CapabilityChoice;
    use figaro_llm::gateway::{GatewayReply, GatewayResult, ReasoningGateway};
    use serde_json::{Map, Value, json};
    use tower::ServiceExt;

    use super::*;

    struct EchoCapability;

    #[async_trait]
    impl Capability for EchoCapability {
        fn name(&self) -> &str {
            "tts"
        }

        fn spec(&self) -> CapabilitySpec {
            CapabilitySpec::new(
                "tts",
                "speak text",
                vec![ParameterSpec::optional(
                    "text",
                    ParameterKind::String,
                    "text to speak",
                )],
            )
        }

        async fn execute(
            &self,
            arguments: Map<String, Value>,
            _ctx: &CapabilityContext,
        ) -> Result<CapabilityOutput, CapabilityError> {
            let text = arguments
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(CapabilityOutput::text(format!("spoke: {text}")))
        }
    }

    struct ScriptedGateway {
        reply: GatewayReply,
    }

    #[async_trait]
    impl ReasoningGateway for ScriptedGateway {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn converse(
            &self,
            _prompt: &PromptContext,
            _capabilities: &[CapabilitySpec],
        ) -> GatewayResult<GatewayReply> {
            Ok(self.reply.clone())
        }
    }

    fn make_server(reply: GatewayReply) -> FigaroServer {
        let mut registry = CapabilityRegistry::new();
        registry.register(Arc::new(EchoCapability)).unwrap();
        let controller =
            TurnController::new(Arc::new(ScriptedGateway { reply }), Arc::new(registry));
        FigaroServer::new(ServerConfig::default(), Arc::new(controller))
    }

    fn tts_reply(text: &str) -> GatewayReply {
        GatewayReply {
            choices: vec![CapabilityChoice {
                name: "tts".into(),
                arguments: json!({"text": text}).as_object().cloned().unwrap_or_default(),
            }],
            text: None,
        }
    }

    fn post_turn(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/turn")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn server_with_default_config() {
        let server = make_server(GatewayReply::default());
        assert_eq!(server.config().host, "127.0.0.1");
        assert_eq!(server.config().port, 5000);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = make_server(GatewayReply::default()).router();

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let parsed = body_json(resp).await;
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["capabilities"], 1);
        assert!(parsed["uptime_secs"].is_number());
    }

    #[tokio::test]
    async fn turn_endpoint_dispatches_a_capability() {
        let app = make_server(tts_reply("hi")).router();

        let resp = app
            .oneshot(post_turn(&json!({"prompt": "say hi"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let parsed = body_json(resp).await;
        assert_eq!(parsed["type"], "dispatched");
        assert_eq!(parsed["capability"], "tts");
        assert_eq!(parsed["result"]["summary"], "spoke: hi");
    }

    #[tokio::test]
    async fn turn_endpoint_accepts_content_field() {
        let app = make_server(tts_reply("hi")).router();

        let resp = app
            .oneshot(post_turn(&json!({"content": "say hi"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let parsed = body_json(resp).await;
        assert_eq!(parsed["type"], "dispatched");
    }

    #[tokio::test]
    async fn turn_endpoint_surfaces_prose_replies() {
        let app = make_server(GatewayReply {
            choices: Vec::new(),
            text: Some("Which notebook?".into()),
        })
        .router();

        let resp = app
            .oneshot(post_turn(&json!({"prompt": "edit it"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let parsed = body_json(resp).await;
        assert_eq!(parsed["type"], "no_op_text");
        assert_eq!(parsed["text"], "Which notebook?");
    }

    #[tokio::test]
    async fn missing_prompt_returns_400() {
        let app = make_server(GatewayReply::default()).router();

        let resp = app.oneshot(post_turn(&json!({}))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let parsed = body_json(resp).await;
        assert_eq!(parsed["error"], "No prompt provided");
    }

    #[tokio::test]
    async fn blank_prompt_returns_400() {
        let app = make_server(GatewayReply::default()).router();

        let resp = app
            .oneshot(post_turn(&json!({"prompt": "   "})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = make_server(GatewayReply::default()).router();

        let req = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
